pub mod a001_barang;
