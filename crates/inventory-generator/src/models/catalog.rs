//! 取值目录
//!
//! 各枚举列的固定候选值，生成时均匀随机选取。

pub const BRANDS: &[&str] = &["Dell", "HP", "Lenovo", "Apple", "Asus"];

pub const PRODUCTS: &[&str] = &["Laptop", "Desktop", "Monitor", "Mobile", "Tablet"];

pub const CPUS: &[&str] = &["i3", "i5", "i7", "Ryzen 5", "Ryzen 7"];

pub const RAMS: &[&str] = &["4GB", "8GB", "16GB", "32GB"];

pub const HDDS: &[&str] = &["256GB SSD", "512GB SSD", "1TB HDD", "1TB SSD"];
