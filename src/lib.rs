//! Backend de alquiler de vehículos
//!
//! API REST para el storefront de alquiler: catálogo de vehículos, ciclo de
//! vida de reservas con derivación de estados, reviews y panel de
//! administración.

pub mod cache;
pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
