pub mod position_codec;
