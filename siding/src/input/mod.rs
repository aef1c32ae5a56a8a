pub mod topology;
pub mod scenario;
