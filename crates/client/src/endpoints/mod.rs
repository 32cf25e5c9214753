/// Availability feed endpoints under the fields routes
pub mod availability;
/// Booking record endpoints
pub mod bookings;
/// Field type catalog endpoints
pub mod field_types;
/// Field CRUD endpoints
pub mod fields;
