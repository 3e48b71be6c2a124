//! Models that own the solutions and route the selected one to the tools.
//!
//! Both screens pair a router with a [`Workspace`] of tools.

mod custom;
mod router;
mod solutions_model;
mod workspace;

pub use custom::CustomSolutionModel;
pub use router::ActiveSolutionRouter;
pub use solutions_model::SolutionsModel;
pub use workspace::Workspace;
