//! # fyyur
//!
//! Listing service for live-music venues, artists, and the shows that
//! connect them.
//!
//! Every page is answered as a [`view::Page`]: the template name, any
//! flash notices, and the context a template engine would render. Writes
//! commit atomically; a rolled-back write becomes a failure notice rather
//! than an error page.
//!
//! ## Architecture
//!
//! ```text
//! Browser (forms, links)
//!     │
//!     ├── Page / Form Handlers (api/)
//!     │
//!     ├── ListingService (service/)
//!     ├── Aggregation: areas, past/upcoming, search (domain/)
//!     │
//!     └── ListingStore (persistence/)
//!           ├── PostgreSQL
//!           └── In-memory
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
pub mod view;
