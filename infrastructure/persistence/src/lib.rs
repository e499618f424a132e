pub mod db;
pub mod recommendation {
    pub mod entity;
    pub mod repository;
}
