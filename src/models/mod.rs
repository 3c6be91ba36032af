pub mod company;
pub mod customer;
pub mod invoice;
pub mod order;
pub mod product;
pub mod salesperson;
