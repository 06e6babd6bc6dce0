pub mod json_file_repository;

pub use json_file_repository::JsonFileDietPlanRepository;
