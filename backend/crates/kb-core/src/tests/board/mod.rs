mod column_defaults;
mod column_deletion;
mod column_order;
mod status_slug;
