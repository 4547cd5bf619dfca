pub mod planetterp;
