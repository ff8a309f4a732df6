pub mod empresas;
pub mod health;
pub mod tarefas;
