mod roundtrip;
mod stringify;
