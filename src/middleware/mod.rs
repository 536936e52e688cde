// Middleware module - request logging and request id propagation

pub mod request_logger;

pub use request_logger::request_logger_middleware;
