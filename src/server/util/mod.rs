pub mod transaction;

#[cfg(test)]
mod test;
