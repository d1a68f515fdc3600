//! Modelos de dominio
//!
//! Structs que mapean a las tablas de PostgreSQL y tipos derivados.

pub mod booking;
pub mod review;
pub mod stats;
pub mod user;
pub mod vehicle;
