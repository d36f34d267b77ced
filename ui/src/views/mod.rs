mod about;
pub use about::About;

mod home;
pub use home::Home;
