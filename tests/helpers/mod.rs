mod batch_factory;

pub use batch_factory::BatchFactory;
