pub mod association;
pub mod component;
pub mod product;
pub mod supplier;

pub use association::AssociationRepository;
pub use component::ComponentRepository;
pub use product::ProductRepository;
pub use supplier::SupplierRepository;
