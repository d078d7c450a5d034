pub mod ddexp;
