// Example: drive the carousel with prev/next and a jump, printing the translate commands.
use carousel::{Carousel, CarouselOptions, Measurement};

fn main() {
    let mut c = Carousel::new(CarouselOptions::default().with_rewind(true));
    // A 300px frame showing three 100px slides out of eight.
    let initial = c.reset(&Measurement::from_widths(300, [100; 8]));
    println!("initial translate={initial:?}");

    for _ in 0..3 {
        if let Some(outcome) = c.next() {
            println!(
                "next: {} -> {} translate={:?} controls={:?}",
                outcome.from_index,
                outcome.current_slide,
                outcome.translate,
                c.controls()
            );
        }
    }

    let outcome = c.slide_to(2);
    println!("slide_to(2): {outcome:?}");
    println!("state={:?} index={}", c.state(), c.return_index());
}
