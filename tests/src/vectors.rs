//! ECDSA P-256 known-answer vectors

/// One deterministic-signature vector
#[derive(Debug, Clone, Copy)]
pub struct SignatureVector {
    /// Where the vector comes from
    pub name: &'static str,
    /// Private scalar, hex
    pub private_key: &'static str,
    /// Uncompressed public key `04 ∥ X ∥ Y`, hex
    pub public_key: &'static str,
    /// 32-byte digest, hex
    pub digest: &'static str,
    /// Expected `r` with RFC 6979 nonces, hex
    pub r: &'static str,
    /// Expected `s` with RFC 6979 nonces, hex
    pub s: &'static str,
}

/// Private key 0x11…11 signing SHA-256("Hello Bob!")
pub const HELLO_BOB: SignatureVector = SignatureVector {
    name: "hello-bob",
    private_key: "1111111111111111111111111111111111111111111111111111111111111111",
    public_key: "040217e617f0b6443928278f96999e69a23a4f2c152bdf6d6cdf66e5b80282d4ed\
                 194a7debcb97712d2dda3ca85aa8765a56f45fc758599652f2897c65306e5794",
    digest: "42ba8354db263a6a5a9f74d6b7ceb4c962a3d8fd58a41969e521eb0222455415",
    r: "39f81ef69d4b3d9724645fe188779c72af8e8deab88fff8b2ec2c29f9134d718",
    s: "22322ac40a982a4612cf0b2eced755a85867634ecdb3e183c46c154cc0326dab",
};

/// RFC 6979 appendix A.2.5, P-256 with SHA-256, message "sample"
pub const RFC6979_SAMPLE: SignatureVector = SignatureVector {
    name: "rfc6979-a.2.5-sha256-sample",
    private_key: "c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721",
    public_key: "0460fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6\
                 7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299",
    digest: "af2bdbe1aa9b6ec1e2ade1d694f41fc71a831d0268e9891562113d8a62add1bf",
    r: "efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716",
    s: "f7cb1c942d657c41d436c7a1b6e29f65f3e900dbb9aff4064dc4ab2f843acda8",
};

/// Every deterministic vector
pub const ALL: &[SignatureVector] = &[HELLO_BOB, RFC6979_SAMPLE];
