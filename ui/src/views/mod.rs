mod home;
pub use home::Home;

mod about;
pub use about::About;

mod services;
pub use services::Services;

mod luxury_villa;
pub use luxury_villa::LuxuryVilla;

mod blog;
pub use blog::Blog;

mod login;
pub use login::LoginPage;
