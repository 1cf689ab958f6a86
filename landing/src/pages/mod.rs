// Landing page routes

mod home;
mod landing;
mod launch;
mod showcase;

pub use home::HomePage;
pub use landing::LandingPage;
pub use launch::LaunchPage;
pub use showcase::ShowcasePage;
