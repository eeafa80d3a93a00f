pub mod festival;
