pub mod baby_mapper;
