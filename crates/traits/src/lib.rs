pub mod container;

pub use container::{ContainerError, ContainerStore, InMemoryContainer, ResourceSlot};
