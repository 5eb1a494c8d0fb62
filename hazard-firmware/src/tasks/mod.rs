// Task-Modul: Enthält den einzigen Embassy Task
//
// Die gesamte Logik läuft in einer einzigen Kontrollschleife.

pub mod hazard_control;

// Re-export Tasks für einfachen Import
pub use hazard_control::hazard_control_task;
