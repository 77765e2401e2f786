pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod storage {
    pub mod file;
    pub mod memory;
}
