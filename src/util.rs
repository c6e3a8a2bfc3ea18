pub mod detrand;
