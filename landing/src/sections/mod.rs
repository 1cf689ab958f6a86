// Landing page sections

mod backdrop;
mod benefits;
mod closing;
mod code_example;
mod footer;
mod hero;
mod how_it_works;
mod stats;

pub use backdrop::Backdrop;
pub use benefits::Benefits;
pub use closing::Closing;
pub use code_example::{CodeExample, tab_class};
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use stats::Stats;
