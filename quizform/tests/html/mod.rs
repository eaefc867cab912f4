mod fields;
mod page;
