//! Web interface components for the SentiMent application
//!
//! This module contains the Dioxus components that make up the web interface:
//! the navigation bar layout and one component per routed page.

/// Navigation bar layout component
mod navbar;
pub use navbar::Navbar;

/// Landing page component
mod landing;
pub use landing::Landing;

/// Sign-in page component
mod auth;
pub use auth::Auth;

/// Dashboard page component
mod dashboard;
pub use dashboard::Dashboard;

/// Profile page component
mod profile;
pub use profile::Profile;

/// Chatbot page component
mod chatbot;
pub use chatbot::Chatbot;

/// Channels page component
mod channels;
pub use channels::Channels;

/// Twitter sentiment page component
mod twitter;
pub use twitter::Twitter;

/// Catch-all page for unmatched paths
mod not_found;
pub use not_found::NotFound;
