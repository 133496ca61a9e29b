//! Known-answer fixtures shared by the integration tests

/// A private key with its derived public keys
pub struct KeyVector {
    pub private_key: &'static str,
    pub compressed: &'static str,
    pub uncompressed: &'static str,
    pub hash160: &'static str,
}

/// A deterministic signature over a 32-byte digest
pub struct SignVector {
    pub private_key: &'static str,
    pub digest: &'static str,
    pub der: &'static str,
    pub recovery_id: u8,
}

pub const REFERENCE_KEY: KeyVector = KeyVector {
    private_key: "e580512c800c6de3bd5e65695b4cab739211b7ac41ffc2991b0cf75c4d3ccbdf",
    compressed: "0254dec37f0858dd993798f8b31ba912eb3cee803ac4209596cc79c804a2f3c201",
    uncompressed: "0454dec37f0858dd993798f8b31ba912eb3cee803ac4209596cc79c804a2f3c201\
                   c5c8c530ebd8af6cce71d1b2250dee29e660b1d10140226a7f5cbff46228de60",
    hash160: "7b70f5931cb13d4a3fb60cdb42544ecb61090866",
};

pub const SIGN_VECTORS: &[SignVector] = &[
    SignVector {
        private_key: "e580512c800c6de3bd5e65695b4cab739211b7ac41ffc2991b0cf75c4d3ccbdf",
        digest: "0101010101010101010101010101010101010101010101010101010101010101",
        der: "304402203b63adb7a4d0f364269c7008cbb5647cbe825b3986ad7d245927ec2be78fed91\
              02207cc0bcc62dd9add67d27c590e978d5777591e1d7e738e3b05844e968164041a3",
        recovery_id: 0,
    },
    // sha256("hello")
    SignVector {
        private_key: "e580512c800c6de3bd5e65695b4cab739211b7ac41ffc2991b0cf75c4d3ccbdf",
        digest: "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
        der: "30440220222fdea7bbee337ee07c9e0f1d079828989ec3682282531f4f7c50667c7100a4\
              02205f599b5e18fcc2a646bec2bcc0894a553e35fc765b32b4e7908e22ce9fdbb233",
        recovery_id: 1,
    },
    // key 1, sha256("Satoshi Nakamoto")
    SignVector {
        private_key: "0000000000000000000000000000000000000000000000000000000000000001",
        digest: "a0dc65ffca799873cbea0ac274015b9526505daaaed385155425f7337704883e",
        der: "3045022100934b1ea10a4b3c1757e2b0c017d0b6143ce3c9a7e6a4a49860d7a6ab210ee3d8\
              02202442ce9d2b916064108014783e923ec36b49743e2ffa1c4496f01a512aafd9e5",
        recovery_id: 1,
    },
    // key n - 1, sha256("Satoshi Nakamoto")
    SignVector {
        private_key: "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140",
        digest: "a0dc65ffca799873cbea0ac274015b9526505daaaed385155425f7337704883e",
        der: "3045022100fd567d121db66e382991534ada77a6bd3106f0a1098c231e47993447cd6af2d0\
              02206b39cd0eb1bc8603e159ef5c20a5c8ad685a45b06ce9bebed3f153d10d93bed5",
        recovery_id: 0,
    },
];
