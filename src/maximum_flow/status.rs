#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Status {
    #[default]
    NotSolved,
    BadInput,
    Optimal,
}
