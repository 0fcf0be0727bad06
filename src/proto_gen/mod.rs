// Generated by build/rust_build.rs into $OUT_DIR/proto_gen
include!(concat!(env!("OUT_DIR"), "/proto_gen/mod.rs"));
