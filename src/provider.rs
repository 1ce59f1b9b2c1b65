pub(crate) trait ConfigProvider {
    fn num_people(&self) -> Option<i8>;
}
