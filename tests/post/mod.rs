mod test_construct;
mod test_select;
