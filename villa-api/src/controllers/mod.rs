pub mod villa_controller;

pub use villa_controller::router;
