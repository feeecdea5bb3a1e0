pub mod quiz_dto;
pub mod tutor_dto;
