pub mod kategori;
pub mod kondisi;

pub use kategori::Kategori;
pub use kondisi::Kondisi;
