// Example: clone-based infinite looping and the seam correction after the wrap animation.
use carousel::infinite::{self, ClonePosition};
use carousel::{Carousel, CarouselOptions, Measurement};

fn main() {
    let real = ["a", "b", "c", "d", "e"];
    let pad = 1;

    // What the view layer would do with its DOM nodes.
    let mut strip: Vec<&str> = real.to_vec();
    for op in infinite::clone_ops(real.len(), pad) {
        let node = strip[op.source];
        match op.at {
            ClonePosition::End => strip.push(node),
            ClonePosition::Start => strip.insert(0, node),
        }
    }
    println!("padded strip: {strip:?}");

    let mut c = Carousel::new(CarouselOptions::default().with_infinite(pad));
    c.reset(&Measurement::from_widths(100, vec![100; strip.len()]));

    for step in 0..7 {
        let Some(outcome) = c.next() else { break };
        println!(
            "step {step}: animate to {} showing {:?}, logical index {}",
            outcome.translate.to,
            strip[outcome.translate.to.unsigned_abs() as usize / 100],
            c.return_index()
        );
        // The view reports that the animation finished.
        if let Some(fix) = c.on_transition_end() {
            println!("        seam correction: jump to {} without animation", fix.to);
        }
    }
}
