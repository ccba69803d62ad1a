//! Pure board algorithms shared by the services: column seeding, ordering,
//! deletion targets and status slugs. Nothing here touches storage.

pub mod column_defaults;
pub mod column_deletion;
pub mod column_order;
pub mod status_slug;
