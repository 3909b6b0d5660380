use colored::Colorize;
use corpore_common::api::{ServiceOrder, Worker};

pub trait Fancy {
    fn fancy(&self) -> String;
}

impl Fancy for Worker {
    fn fancy(&self) -> String {
        if self.active {
            "active".green().to_string()
        } else {
            "inactive".red().to_string()
        }
    }
}

impl Fancy for ServiceOrder {
    fn fancy(&self) -> String {
        if self.completion_time.is_some() {
            "completed".green().to_string()
        } else {
            "open".yellow().to_string()
        }
    }
}
