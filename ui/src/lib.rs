//! Shared UI crate for the Hearthside Realty site. Cross-platform logic, components, and views live here.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_logout;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    // Site footer (components/app_footer.rs)
    pub mod app_footer;
    pub use app_footer::AppFooter;

    // Reveal-on-scroll wrapper (components/reveal.rs)
    pub mod reveal;
    pub use reveal::Reveal;

    // Manual testimonial slider (components/carousel.rs)
    pub mod carousel;
    pub use carousel::Testimonial;
    pub use carousel::TestimonialCarousel;

    // Auto-advancing capability selector (components/capability_wheel.rs)
    pub mod capability_wheel;
    pub use capability_wheel::CapabilityWheel;
    pub use capability_wheel::WheelItem;
}
