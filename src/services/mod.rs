pub mod lookup;

pub use lookup::{GradeLookup, ProfessorLookup, ProfessorMatch};
