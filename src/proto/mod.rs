pub mod generated_proto {
    #![allow(non_snake_case)]
    include!(concat!(env!("OUT_DIR"), "/protos/mod.rs"));
}
