/// Why [`crate::Slider::setup`] refused to start.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("slider is already set up; call destroy() first")]
    AlreadySetUp,
    #[error("no frame element matches class `{0}`")]
    MissingFrame(String),
    #[error("no slide container matches class `{0}` inside the frame")]
    MissingSlideContainer(String),
    #[error("the slide container has no slides")]
    NoSlides,
    #[error("infinite pad {pad} exceeds the slide count {count}")]
    InfiniteTooLarge { pad: usize, count: usize },
}
