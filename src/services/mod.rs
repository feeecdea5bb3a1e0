pub mod llm_service;
pub mod parser_service;
pub mod prompt_service;
pub mod quiz_service;
pub mod sanitize_service;
pub mod tutor_service;
