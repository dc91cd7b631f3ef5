use serde::{Deserialize, Serialize};

/// Headcount allocation for one department.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourceAllocation {
    pub department: String,
    pub allocated: f64,
    pub utilized: f64,
    pub capacity: f64,
}

impl ResourceAllocation {
    pub fn utilization_percentage(&self) -> f64 {
        if self.capacity == 0.0 {
            return 0.0;
        }
        (self.utilized / self.capacity) * 100.0
    }

    pub fn is_overloaded(&self) -> bool {
        self.allocated > self.capacity
    }

    pub fn available(&self) -> f64 {
        (self.capacity - self.utilized).max(0.0)
    }
}
