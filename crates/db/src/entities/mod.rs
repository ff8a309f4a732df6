pub mod empresa;
pub mod tarefa;
