pub(crate) mod subjects;
