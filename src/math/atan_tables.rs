/*
 * // Copyright (c) Radzivon Bartoshyk 7/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */

/// `atan(i / 64)` for `i` in `0..=64`.
pub(crate) static ATAN_TABLE: [(u64, u64, u64); 65] = [
    (0x0000000000000000, 0x0000000000000000, 0x0000000000000000),
    (0xb8c13f6fbe21347e, 0xbc2220c39d4dff50, 0x3f8fff555bbb729b),
    (0x38d8c42700da052a, 0xbc35ec431444912c, 0x3f9ffd55bba97625),
    (0xb8a2271c44453610, 0xbc086ef8f794f105, 0x3fa7fb818430da2a),
    (0xb8bf2aece63ed30a, 0xbc3c934d86d23f1d, 0x3faff55bb72cfdea),
    (0x38eb37d93d661f69, 0x3c5ac4ce285df847, 0x3fb3f59f0e7c559d),
    (0xb8ef262607d5ee1a, 0xbc5cfb654c0c3d98, 0x3fb7ee182602f10f),
    (0x38e767ba435f943a, 0x3c5f7b8f29a05987, 0x3fbbe39ebe6f07c3),
    (0xb8edc421d31aa09b, 0xbc4cd37686760c17, 0x3fbfd5ba9aac2f6e),
    (0x38c5f33c542b5854, 0xbc4b485914dacf8c, 0x3fc1e1fafb043727),
    (0x38cfd0aeea5e9f17, 0x3c661a3b0ce9281b, 0x3fc3d6eee8c6626c),
    (0xb8e0b35e960c9157, 0xbc5054ab2c010f3d, 0x3fc5c9811e3ec26a),
    (0xb8ec5bc36297f94c, 0x3c5347b0b4f881ca, 0x3fc7b97b4bce5b02),
    (0xb8d14c5540ed9b3e, 0x3c4cf601e7b4348e, 0x3fc9a6a8e96c8626),
    (0xb8ca1faf375dae59, 0x3c217b10d2e0e5ab, 0x3fcb90d7529260a2),
    (0xb8e438c276989eb0, 0x3c6c648d1534597e, 0x3fcd77d5df205736),
    (0x38e0bf2d53fd481c, 0x3c68ab6e3cf7afbd, 0x3fcf5b75f92c80dd),
    (0x3917a7455c4a1541, 0x3c762e47390cb865, 0x3fd09dc597d86362),
    (0xb90f59cbc0b47591, 0x3c630ca4748b1bf9, 0x3fd18bf5a30bf178),
    (0x38e447a447c219f2, 0xbc7077cdd36dfc81, 0x3fd278372057ef46),
    (0xb904335fdd6dc1ec, 0xbc6963a544b672d8, 0x3fd362773707ebcc),
    (0xb90c9872c5f61d6f, 0xbc75d5e43c55b3ba, 0x3fd44aa436c2af0a),
    (0xb9085cfb7b4f18b4, 0xbc62566480884082, 0x3fd530ad9951cd4a),
    (0x39141f856810b9bd, 0xbc7a725715711f00, 0x3fd614840309cfe2),
    (0xb8ebb7cc27bc6885, 0xbc7c63aae6f6e918, 0x3fd6f61941e4def1),
    (0x38e102625c13c1d6, 0x3c769c885c2b249a, 0x3fd7d5604b63b3f7),
    (0x391451bb896f93ca, 0x3c7b6d0ba3748fa8, 0x3fd8b24d394a1b25),
    (0xb90920f1b617feae, 0x3c79e6c988fd0a77, 0x3fd98cd5454d6b18),
    (0xb8e8ec991ffbf22e, 0xbc724dec1b50b7ff, 0x3fda64eec3cc23fd),
    (0x3908d17555204463, 0x3c7ae187b1ca5040, 0x3fdb3a911da65c6c),
    (0x391970076c297e5f, 0xbc7cc1ce70934c34, 0x3fdc0db4c94ec9f0),
    (0x391b8590c9649d0e, 0xbc7a2cfa4418f1ad, 0x3fdcde53432c1351),
    (0xb905cbf247afa9e3, 0x3c7a2b7f222f65e2, 0x3fddac670561bb4f),
    (0x391be7f45e414171, 0x3c70e53dc1bf3435, 0x3fde77eb7f175a34),
    (0xb90c4cf7bfcdb482, 0xbc6a3992dc382a23, 0x3fdf40dd0b541418),
    (0xb928f4d32db6f39b, 0xbc8b32c949c9d593, 0x3fe0039c73c1a40c),
    (0x39145703c4557362, 0xbc7d5b495f6349e6, 0x3fe0657e94db30d0),
    (0x38e46fb2552a1b53, 0x3c5974fa13b5404f, 0x3fe0c6145b5b43da),
    (0xb8e6a08e08308c09, 0xbc52bdaee1c0ee35, 0x3fe1255d9bfbd2a9),
    (0x38d6483e38911241, 0x3c8c621cec00c301, 0x3fe1835a88be7c13),
    (0x38cba3c8c533f033, 0xbc5928df287a668f, 0x3fe1e00babdefeb4),
    (0xb8ffde0266a172e0, 0x3c6c421c9f38224e, 0x3fe23b71e2cc9e6a),
    (0xb917341c31d47c2e, 0xbc709e73b0c6c087, 0x3fe2958e59308e31),
    (0x392d6d652f31b64f, 0x3c8c5d5e9ff0cf8d, 0x3fe2ee628406cbca),
    (0x392fe779b5c8de0c, 0x3c81021137c71102, 0x3fe345f01cce37bb),
    (0x3929e238b4558d47, 0xbc82304331d8bf46, 0x3fe39c391cd4171a),
    (0x391c077e75d0f46f, 0x3c7ecf8b492644f0, 0x3fe3f13fb89e96f4),
    (0xb9143c68bdefae4b, 0xbc7f76d0163f79c8, 0x3fe445065b795b56),
    (0xb9029b08e07bcbb1, 0x3c72419a87f2a458, 0x3fe4978fa3269ee1),
    (0xb9263fcdbc8fd116, 0x3c84a33dbeb3796c, 0x3fe4e8de5bb6ec04),
    (0xb91b302819a3a6a8, 0xbc81bb74abda520c, 0x3fe538f57b89061f),
    (0xb915c42f9f092afe, 0xbc75e5c9d8c5a950, 0x3fe587d81f732fbb),
    (0x390038501ba15a32, 0x3c60028e4bc5e7ca, 0x3fe5d58987169b18),
    (0xb8f584af61d7d72b, 0xbc62b785350ee8c1, 0x3fe6220d115d7b8e),
    (0x3907c9cf234ff940, 0xbc76ea6febe8bbba, 0x3fe66d663923e087),
    (0xb91be0aa2b7a42e1, 0xbc8a80386188c50e, 0x3fe6b798920b3d99),
    (0x391110f4f5ebb304, 0xbc78c34d25aadef6, 0x3fe700a7c5784634),
    (0x38ec70c464508a9b, 0x3c47b2a6165884a1, 0x3fe748978fba8e0f),
    (0x392f652027f5703f, 0x3c8406a089803740, 0x3fe78f6bbd5d315e),
    (0x39205cfa02870684, 0x3c8560821e2f3aa9, 0x3fe7d528289fa093),
    (0x3907d126ac77433d, 0xbc7bf76229d3b917, 0x3fe819d0b7158a4d),
    (0x390dcfd74b876070, 0x3c66b66e7fc8b8c3, 0x3fe85d69576cc2c5),
    (0xb8ffddeb259de4a0, 0xbc855b9a5e177a1b, 0x3fe89ff5ff57f1f8),
    (0x3905f1c074e4c375, 0xbc7ec182ab042f61, 0x3fe8e17aa99cc05e),
    (0xb90f1976b7ed8fbc, 0x3c81a62633145c07, 0x3fe921fb54442d18),
];

/// Limbs of `atan(i / 64)` for `i` in `1..=64`, all with leading index `-1`.
pub(crate) static ATAN_SCS_WORDS: [[u32; 8]; 64] = [
    [
        0x00fffaaa, 0x3776e535, 0x1bbe78c5, 0x190057dd,
        0x204820ef, 0x1970437b, 0x2f460695, 0x3e00c9d5,
    ],
    [
        0x01ffd55b, 0x2ea5d892, 0x284ef3ae, 0x3b6ed463,
        0x042700da, 0x014a606d, 0x3102c8e0, 0x0beda26b,
    ],
    [
        0x02ff7030, 0x2186d14f, 0x33c88384, 0x0d61df56,
        0x3b1c7777, 0x164f807f, 0x08229dcc, 0x120217de,
    ],
    [
        0x03feab76, 0x3967ef4e, 0x0db2c9e4, 0x2dc0e2e0,
        0x3544c670, 0x12cf59d4, 0x2cb70e1e, 0x29f803c4,
    ],
    [
        0x04fd67c3, 0x27c559d6, 0x2c4ce285, 0x37e11cd9,
        0x2fb27acc, 0x0fb4bf37, 0x243371ad, 0x217d4981,
    ],
    [
        0x05fb8609, 0x202f10e8, 0x3049ab3f, 0x0f099f06,
        0x33b3f054, 0x08f3055c, 0x06e19599, 0x3e058c33,
    ],
    [
        0x06f8e7af, 0x26f07c37, 0x37b8f29a, 0x01661cbb,
        0x0f7486bf, 0x0a1d2344, 0x09f6c6c3, 0x20bd6866,
    ],
    [
        0x07f56ea6, 0x2ac2f6dc, 0x19644bcc, 0x13e7d111,
        0x37bc59ca, 0x2fb2bb35, 0x2c917649, 0x2aefbf6d,
    ],
    [
        0x08f0fd7d, 0x2086e4dc, 0x25bd3759, 0x0a60e82b,
        0x399e2a15, 0x2b0a7f00, 0x0c8e600b, 0x041c0be9,
    ],
    [
        0x09eb7774, 0x18cc4d8b, 0x0347619d, 0x0940d83f,
        0x2857752f, 0x13e2eb74, 0x28dc4cbc, 0x0292d0a3,
    ],
    [
        0x0ae4c08f, 0x07d84d3b, 0x3ab54d3f, 0x3bc30b7a,
        0x1942d3e6, 0x37546c1a, 0x34cc1f63, 0x194cf49e,
    ],
    [
        0x0bdcbda5, 0x39cb6044, 0x347b0b4f, 0x2207271d,
        0x08793ad0, 0x035a0e28, 0x2b2af05a, 0x1a93c79f,
    ],
    [
        0x0cd35474, 0x2d90c4c3, 0x27b00f3d, 0x28691bba,
        0x33aabf12, 0x19306f09, 0x361bf05e, 0x16da2224,
    ],
    [
        0x0dc86ba9, 0x124c1440, 0x22f621a5, 0x3072d54b,
        0x30286451, 0x0a34e92c, 0x12555620, 0x1bc65fe1,
    ],
    [
        0x0ebbeaef, 0x240ae6ce, 0x0c91a2a6, 0x22cbef5e,
        0x0e7b12ce, 0x30a80cbf, 0x3005e6da, 0x067e8a27,
    ],
    [
        0x0fadbafc, 0x25901bac, 0x156dc79e, 0x3d7de885,
        0x3e5aa7fa, 0x240e22ce, 0x036b7a3a, 0x1d9f2512,
    ],
    [
        0x109dc597, 0x3618d896, 0x0b91ce43, 0x0b8655e9,
        0x3455c4a1, 0x1505b7e8, 0x0b61d090, 0x30ca0259,
    ],
    [
        0x118bf5a3, 0x02fc5e09, 0x21948e91, 0x18dfc414,
        0x31a1fa5c, 0x14de0d27, 0x379f949d, 0x1dd6a845,
    ],
    [
        0x12783720, 0x15fbd16f, 0x220c8b24, 0x2037f0a2,
        0x0f488f84, 0x0cf906b1, 0x2458f5e2, 0x333a3984,
    ],
    [
        0x13627737, 0x01faf2f3, 0x138b5769, 0x0c693d79,
        0x25011491, 0x3c28597a, 0x2bffeb4b, 0x08060982,
    ],
    [
        0x144aa436, 0x30abc26a, 0x0a86f0ea, 0x24c45c6c,
        0x3c69d04f, 0x0521a2ec, 0x0c17b488, 0x099be758,
    ],
    [
        0x1530ad99, 0x14735276, 0x35336fee, 0x3dfbecf4,
        0x18242587, 0x0e98f7a6, 0x2fa744ba, 0x14ea64f8,
    ],
    [
        0x16148403, 0x0273f865, 0x236a3aa3, 0x2e100507,
        0x3856810b, 0x26f4bd6b, 0x1ae05fbb, 0x38f68500,
    ],
    [
        0x16f61941, 0x3937bc23, 0x27154642, 0x116e7f22,
        0x1067b087, 0x0bbd72a2, 0x2b988e67, 0x32e519a4,
    ],
    [
        0x17d5604b, 0x18ecfdd6, 0x2722170a, 0x3249a088,
        0x04c4b827, 0x20eaf2ef, 0x2e7f2c7e, 0x3ef21e74,
    ],
    [
        0x18b24d39, 0x1286c95b, 0x1b42e8dd, 0x08fa8514,
        0x1bb896f9, 0x0f2869d5, 0x03ed04f7, 0x1ca5d849,
    ],
    [
        0x198cd545, 0x135ac619, 0x39b2623f, 0x10a76cdb,
        0x38724f40, 0x02a4410c, 0x2c282646, 0x33376dea,
    ],
    [
        0x1a64eec3, 0x3308ff2d, 0x2c84f92b, 0x34800f38,
        0x26cdc008, 0x06e90b0d, 0x0e784cce, 0x3fc789ee,
    ],
    [
        0x1b3a911d, 0x29971b1a, 0x3861ec72, 0x2504031a,
        0x0baaa902, 0x08c5fdb8, 0x089991a4, 0x134faca1,
    ],
    [
        0x1c0db4c9, 0x13b27be3, 0x0f8c63db, 0x0b3cc65c,
        0x0076c297, 0x397af9f5, 0x30472a16, 0x1f5e2c32,
    ],
    [
        0x1cde5343, 0x0b04d425, 0x34c16ef9, 0x30e536e1,
        0x190c9649, 0x3439e794, 0x07681607, 0x2081a0f5,
    ],
    [
        0x1dac6705, 0x186ed3da, 0x0adfc88b, 0x365e1d46,
        0x206dc282, 0x2c3930e6, 0x3e01c59e, 0x0b7374b1,
    ],
    [
        0x1e77eb7f, 0x05d68d10, 0x394f706f, 0x334356f9,
        0x3f45e414, 0x05c402ec, 0x1c8fb28d, 0x043d27e8,
    ],
    [
        0x1f40dd0b, 0x150505f2, 0x38cda478, 0x3eaee476,
        0x18420192, 0x16fc5c5a, 0x2b06c640, 0x087d0904,
    ],
    [
        0x200738e7, 0x20d205c9, 0x269b5b1b, 0x054d9385,
        0x259a4921, 0x2326fe2e, 0x07300bc9, 0x13ef9620,
    ],
    [
        0x20cafd29, 0x2d9867e2, 0x292da827, 0x0b61a515,
        0x303c4557, 0x0d8774dd, 0x3ef1571a, 0x3dcf1e5b,
    ],
    [
        0x218c28b6, 0x2da1ed06, 0x174fa13b, 0x15013ca3,
        0x1f64aa54, 0x0da94553, 0x0a42ba2f, 0x2d899cf5,
    ],
    [
        0x224abb37, 0x3de9547b, 0x142511e3, 0x3c472b4a,
        0x3ee3ef9e, 0x39fb9ddf, 0x19fca302, 0x222e65ff,
    ],
    [
        0x2306b511, 0x1f3e09b8, 0x310e7600, 0x18602059,
        0x083e3891, 0x0490311c, 0x381b2a48, 0x2e3e4036,
    ],
    [
        0x23c01757, 0x2f7f59f9, 0x2d720d78, 0x1665c437,
        0x11e46299, 0x3e0652b3, 0x1d73d4f6, 0x246d1338,
    ],
    [
        0x2476e3c5, 0x264f350e, 0x084393e7, 0x01126e02,
        0x07f6657a, 0x0d1fc353, 0x10dd9d63, 0x320e06ef,
    ],
    [
        0x252b1cb2, 0x1847186f, 0x186313ce, 0x13f78a32,
        0x3e3ce2b8, 0x0f47a945, 0x3b68b1ae, 0x1f788031,
    ],
    [
        0x25dcc508, 0x0365e538, 0x2eaf4ff8, 0x19f1aeb6,
        0x2ca5e636, 0x32740705, 0x1e387ebc, 0x20aa874c,
    ],
    [
        0x268be039, 0x271bdda2, 0x01089be3, 0x22204ff3,
        0x2f36b91b, 0x30617489, 0x3571de1d, 0x0d1e753a,
    ],
    [
        0x27387239, 0x2a0b8cdb, 0x27de6713, 0x28174cf1,
        0x07168ab1, 0x2a3b26e7, 0x24fbc795, 0x325d60d2,
    ],
    [
        0x27e27f71, 0x0f4b7a1e, 0x33e2d249, 0x244f0701,
        0x37e75d0f, 0x11bc801a, 0x32a8028d, 0x1bc21c6f,
    ],
    [
        0x288a0cb6, 0x3cadaae0, 0x224bfa70, 0x08637af0,
        0x39742105, 0x06d4fd55, 0x2f905684, 0x1f3b5022,
    ],
    [
        0x292f1f46, 0x134f7092, 0x1066a1fc, 0x2a457dac,
        0x27b8fc21, 0x289eeb2b, 0x279c8521, 0x26658cc4,
    ],
    [
        0x29d1bcb7, 0x1b760229, 0x119edf59, 0x2f2d74e0,
        0x06486e05, 0x374d87a3, 0x1a93acff, 0x25fa494a,
    ],
    [
        0x2a71eaf7, 0x04830f5c, 0x2245aa12, 0x35be7933,
        0x3d7e65c5, 0x255e427b, 0x3c70253c, 0x003a7dbf,
    ],
    [
        0x2b0fb03e, 0x3997dd6a, 0x068d89ce, 0x256afa8e,
        0x3d060f6d, 0x1406c420, 0x1a32e152, 0x35cfa7ed,
    ],
    [
        0x2bab130e, 0x0b4d8c08, 0x0051c978, 0x2f3e5207,
        0x0280dd0a, 0x34643eff, 0x38981101, 0x3947c44f,
    ],
    [
        0x2c441a22, 0x2ebdc6f6, 0x290f595e, 0x08b9f6a7,
        0x2d4278a0, 0x28d4df9e, 0x071d74fb, 0x156bcce6,
    ],
    [
        0x2cdacc72, 0x11f04369, 0x05640505, 0x344462f9,
        0x0e791a7f, 0x3280783f, 0x1bf9d479, 0x1dec409d,
    ],
    [
        0x2d6f3124, 0x059ecc4a, 0x3fe3cf3b, 0x275e3907,
        0x355d485b, 0x347b3891, 0x381e3376, 0x2ac18cea,
    ],
    [
        0x2e014f8a, 0x3c2319e7, 0x0f2cb695, 0x1210a444,
        0x0f4f5ebb, 0x0c114c79, 0x2a028048, 0x155f64ca,
    ],
    [
        0x2e912f1f, 0x1d470782, 0x3d9530b2, 0x310942e3,
        0x2188c8a1, 0x054d454a, 0x0d0c19cb, 0x3cfd51ee,
    ],
    [
        0x2f1ed77a, 0x2e98af28, 0x035044c0, 0x06e80fb2,
        0x2404feae, 0x01f5ba4a, 0x2e288c5e, 0x16bb5514,
    ],
    [
        0x2faa5051, 0x0fd049aa, 0x30410f17, 0x2755282e,
        0x1f4050e0, 0x341f13d5, 0x30e9d3f6, 0x2ef1655b,
    ],
    [
        0x3033a16e, 0x0ac52664, 0x0227758b, 0x046e92fa,
        0x093563ba, 0x067aef43, 0x1bd8dc20, 0x1467a10b,
    ],
    [
        0x30bad2ae, 0x3661628b, 0x16cdcff9, 0x05c61bb9,
        0x3eba5c3b, 0x00e0e4ba, 0x299a9290, 0x2effa972,
    ],
    [
        0x313febfe, 0x2bf8fbd5, 0x1232d0f4, 0x10bc9e02,
        0x08536988, 0x1b600398, 0x0d3bf99a, 0x1d994f97,
    ],
    [
        0x31c2f553, 0x0e602ee1, 0x0f9f553e, 0x3d09f2be,
        0x0e03a726, 0x06eaf9b7, 0x00aab7f7, 0x29294841,
    ],
    [
        0x3243f6a8, 0x22168c23, 0x1313198a, 0x0b80dc1c,
        0x344a4093, 0x2088a67c, 0x31d0082e, 0x3ea63b13,
    ],
];
