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

/// Taylor coefficients of asin around `(2i + 1) / 128` for `i` in `1..32`,
/// orders 0 to 7 in triple-double.
pub(crate) static ASIN_POLY_TD: [[(u64, u64, u64); 8]; 31] = [
    [
        (0x38b265e3b18dbadd, 0x3c11158c93fa3e42, 0x3f980090091d9024),
        (0xb92cf00ff14e35ed, 0x3c87495d256642e8, 0x3ff001201e638fb0),
        (0x38b3b2ad36665580, 0xbc28295ff571d1d4, 0x3f880510e3f5660b),
        (0x38d7081ecbda79f2, 0xbc3e2573474a4c6b, 0x3fc562d94abe13ac),
        (0x3898fae355643296, 0x3c0b4be50ae85c54, 0x3f820a8fa3388484),
        (0xb8e2a5d688a070d2, 0x3c563d7acc9278ff, 0x3fb355069bd129a9),
        (0xb85bd52766d0b47b, 0xbbdb0d11cc25b735, 0x3f7e2287a739b8e7),
        (0xb8ebc16a1bc83495, 0xbc4bd8195a4a509d, 0x3fa72a78a19349c5),
    ],
    [
        (0xb8d40020a8eb5a8b, 0xbc43090b48c9545f, 0x3fa4014d8ffaf8af),
        (0xb9179eba40e5248a, 0xbc79679d79caa42d, 0x3ff00320eaac655d),
        (0xb8b2529111c96056, 0x3c1dfa30e2db5073, 0x3f940bbdbb74b84c),
        (0x390588c6e00d94dd, 0xbc60f9224ab72c69, 0x3fc57af3ed58e51c),
        (0x38bfbbebcaed5d35, 0x3c2b8f29479011a8, 0x3f8e3102de2f6308),
        (0x38a6b7cd317a0919, 0xbc594375e1da3eb3, 0x3fb391895aaf7410),
        (0xb88c8ed04ff40271, 0x3c10a09f75d1c242, 0x3f89503f64f88efb),
        (0xb8bfc678cb8cd05d, 0x3c2fe97d0ad46821, 0x3fa7b872100a4955),
    ],
    [
        (0xb8c02a9cf44bbd68, 0x3c30d0a050c59955, 0x3fac0393e65c2c93),
        (0x3934fa43d6c878c7, 0x3c9d48433c73e900, 0x3ff00623869ff721),
        (0x38c7b91725765553, 0x3c29383a6047662b, 0x3f9c2046e1dcdd94),
        (0xb8df6324a85af657, 0x3c37aacae0ca6ecc, 0x3fc59f4b251399b2),
        (0xb8d9ec9c4d99e8ca, 0xbc38e72fbccd7b0d, 0x3f95437c642256df),
        (0x388583501fb48a2f, 0xbbe92e462414d1f9, 0x3fb3ed3653adf6fb),
        (0x3883129eec260672, 0xbc3e467872ad1121, 0x3f91eec1e6622f14),
        (0xb8cb8ec023378ad0, 0x3c413a8ab5201774, 0x3fa890f073a94d31),
    ],
    [
        (0x38de9a656114c85b, 0xbc49210506159851, 0x3fb203ce2b380cd3),
        (0xb90a447dd387de05, 0xbc6fc03924fa2d0d, 0x3ff00a29a68e33c6),
        (0xb8ac0d9c55ce4ca4, 0x3c40ca37e58b5603, 0x3fa222625fe1536c),
        (0x38e58cb83c468279, 0x3c643a73c53a33d5, 0x3fc5d0184cd8fda0),
        (0x38d8ed624f71ad9e, 0x3c3f67fe483285ba, 0x3f9b901fbe20c0bb),
        (0xb89ba120185468f9, 0xbc22b0b9a8b9563f, 0x3fb4692a267d026c),
        (0xb8b45d7425170de6, 0x3c128e75bd720db6, 0x3f976d4838c721f9),
        (0x389b7c875c71228f, 0x3c08fcffcb4ef3b3, 0x3fa9b84f1a058475),
    ],
    [
        (0xb89525a73b6c35a9, 0x3c39850602873ead, 0x3fb606f49730ccc5),
        (0x3911e84a51e432c7, 0x3c7ea0772d42fdc4, 0x3ff00f3594627903),
        (0x38ee4c217b73d87a, 0x3c4817b5cb435283, 0x3fa63ef8ba4795bb),
        (0xb8a0f12868f845d4, 0xbc4db2d2e5939a48, 0x3fc60da8f1414a82),
        (0xb897491b6c3cf52f, 0x3c3b245ea5cba083, 0x3fa1045dc1aec3ac),
        (0x38ea76d6c71e1843, 0x3c5b1325983595b9, 0x3fb506e927632444),
        (0x38c9f59d8cc9e626, 0x3c2dea29e8c84c92, 0x3f9d3593ec2b82bf),
        (0xb8d429333c138cf8, 0x3c357e8f862f9089, 0x3fab3490ca88d53a),
    ],
    [
        (0xb8c6b28f031d89be, 0x3c5649d95519e008, 0x3fba0b7f03ba78ac),
        (0x390116af47248953, 0xbc6d0b9d3605464b, 0x3ff0154a33471d84),
        (0xb8ca2294e7655809, 0x3c4d5e30c9dbf690, 0x3faa685411514a9f),
        (0xb8d93d7e3ce843b2, 0x3c6d6faf9fe163e2, 0x3fc6585fc3b01f7d),
        (0xb8c7e3380531219b, 0xbc28019bcad1cbb0, 0x3fa45c15244e67e8),
        (0xb8f771ea74db2031, 0x3c50fd8de2808786, 0x3fb5c8674807153b),
        (0xb8c56584c2b0f833, 0xbc25e0009b52bab9, 0x3fa1ad84ac95d74b),
        (0xb8a3b0882c8f2165, 0x3c4acf8b065ebee2, 0x3fad0d8ee2052e5d),
    ],
    [
        (0x38ea513e9ce10f13, 0x3c4865800d58cefc, 0x3fbe11b009e269b5),
        (0xb8c1d2a86906c160, 0xbc555a6eb4e0463a, 0x3ff01c6b0446fa3f),
        (0x38dc2f6ac4465497, 0x3c4b97674dfbe149, 0x3faea0f68ac4f197),
        (0xb8f68c4504126539, 0x3c661d7b47c93ab2, 0x3fc6b0b5d35509b3),
        (0x38b203761a062681, 0xbc1b3f2f7259bced, 0x3fa7d4facf2b2287),
        (0xb86656793d5cf079, 0xbbc5117c8e6bc5dc, 0x3fb6b0126b8d2ee9),
        (0xb8c7d94b18b7df60, 0x3c22742583691ee0, 0x3fa4f97eb469f979),
        (0xb8b55c29277fef5f, 0xbc35fe6008206456, 0x3faf4d37dffb6899),
    ],
    [
        (0xb8c62d7f350e53c9, 0xbc2ecbd1cfea3329, 0x3fc10ce59ba4a8c4),
        (0xb9193175bc17754a, 0xbc9bba47efe330a2, 0x3ff0249c2bfba5a5),
        (0x38fbc74cb056095b, 0x3c523035419adb9b, 0x3fb175bd9aeaecd4),
        (0x38e31e52fd7825fa, 0x3c46bb4988bef289, 0x3fc7173c128777a3),
        (0xb8cfdae8e679853f, 0x3c2a939a074a00da, 0x3fab753f11b68fb6),
        (0x38e3ba0c71f1f38f, 0x3c589442a9dd60f4, 0x3fb7c0df786e847d),
        (0x38ab7bba0d42ca7d, 0x3c31147fd4ac802b, 0x3fa88a99563e4f56),
        (0x38f0f6e96f6b915c, 0x3c59e0c53bf61ba2, 0x3fb0fff012547c8e),
    ],
    [
        (0xb908667803f05e29, 0xbc6c02be339d3487, 0x3fc3120a9bed2f46),
        (0x39171065c0f5df1c, 0x3c9969cf9bd17c71, 0x3ff02de2795aa91e),
        (0xb8c7444b8feff396, 0x3c4d96303a193dee, 0x3fb3a54d586232ba),
        (0x38e742b318503bd8, 0x3c612aa6d9b8ab5f, 0x3fc78c9d30aec511),
        (0x38e320bea24fc363, 0x3c464451435497a7, 0x3faf439414506dbf),
        (0x38fee71ef8a1fc10, 0xbc5cfafb7d0184fb, 0x3fb8fe5a9268475d),
        (0x38b76f43d82b1e4c, 0x3c3022132b472042, 0x3fac6e353767b7e1),
        (0x38f41a54b0d05747, 0x3c56c20ebe27ab5e, 0x3fb29a544005d1bf),
    ],
    [
        (0xb8dfb3d7c397ad64, 0x3c44d5f66b2b5c3c, 0x3fc5186a00ade974),
        (0x391d7ee61264d072, 0x3c7c75c9ea6dc3ac, 0x3ff038436db7f1e8),
        (0x38ffcab44012946c, 0xbc584bc3d05bb3ae, 0x3fb5e0981806fdad),
        (0xb8ff9e01d0645c3b, 0xbc61e59b38dc10e8, 0x3fc8119fd2e19a92),
        (0xb8fbb2dd1ac2c9a6, 0x3c55f42df227c5e7, 0x3fb1a3a37d622ab8),
        (0x38dbc2f3535fb010, 0xbc4807e8cb33a285, 0x3fba6cbb03a30d41),
        (0x389813c712dabc6f, 0x3c499a897138e3b4, 0x3fb059c3c08de6b3),
        (0x38c59f22e96a05e1, 0x3c58b395cab4c930, 0x3fb47effa5a97023),
    ],
    [
        (0xb8e21ed4372df50f, 0x3c6fa81a09cedb07, 0x3fc720278094cd3c),
        (0xb92791b05afa81ab, 0xbc96925d653a0ad8, 0x3ff043c54618312f),
        (0xb8ed223c7ed04c1a, 0xbc5ac4a7bbf0e2a8, 0x3fb8291f7d083edb),
        (0x38a81ee22f3721d2, 0x3c0279787bddcb42, 0x3fc8a72937b7300d),
        (0x38ff8dc7fcfbdc2a, 0x3c548ff017b22368, 0x3fb3c42e3bdb76e1),
        (0x38f89f3784639cd2, 0xbc554654d7281240, 0x3fbc10fb7f2e19ce),
        (0xb8be83bbac2c9c1f, 0xbc5d66f33b47fd57, 0x3fb2b5ff6fbec8c7),
        (0x38b76e7f7514999f, 0x3c11362f766bf59f, 0x3fb6b9211560c6d4),
    ],
    [
        (0x38d8e06db037c7e4, 0xbc39cd53f748193e, 0x3fc92967a638db38),
        (0x3931d6ac2b0ec20a, 0x3c9bb5f6a1292fb2, 0x3ff0506f05f2e873),
        (0xb8d025ff012b2ce2, 0x3c4dcb9b0dd3bccd, 0x3fba807c364ddb88),
        (0x38d561e6076e3753, 0x3c319c75e25446dc, 0x3fc94e40557f12a7),
        (0xb8d55b272ccf9708, 0xbc36836bee5fce71, 0x3fb607d8c77fe7b1),
        (0xb8cc2567ae53f3da, 0xbc36aae41f7f0db8, 0x3fbdf0f791f9ae05),
        (0x38ee3b0a60928d0b, 0x3c5598f96c8ef19f, 0x3fb555de2a6b6b17),
        (0x38d8daaee674437c, 0xbc50213c3e407cb0, 0x3fb956442f7f8844),
    ],
    [
        (0xb8b0c1fd0404f719, 0x3c517c005e947d2b, 0x3fcb344fe9a97c4d),
        (0x39072c8ed4164efe, 0xbc83ae6d36729422, 0x3ff05e4883899f3d),
        (0xb8f247d40a8b673a, 0x3c51e6bc103811ad, 0x3fbce861528855a6),
        (0x3906ecfd3aacb050, 0xbc65d925c09c6ec2, 0x3fca08118553e4f6),
        (0x38e9d5ab8d9e51d4, 0x3c525fb067860fde, 0x3fb87390b521331f),
        (0xb8f0978da65cc667, 0x3c6da0b0d3932bab, 0x3fc009c7a67c0434),
        (0xb8d62235f7d29958, 0xbc383e0d02745e2f, 0x3fb845126cc27e66),
        (0x38f60a8a91e86d1b, 0x3c5732c800b57e10, 0x3fbc66cfedee49ec),
    ],
    [
        (0xb8ff5e205ad70a5d, 0x3c6ee49ea61bfe56, 0x3fcd4106cba45b08),
        (0x3927916e82c4bd3f, 0x3c8b681116df254d, 0x3ff06d5a76005d46),
        (0xb8bd32eee2f9e3a9, 0xbc25887976444af8, 0x3fbf629ff3bfabbc),
        (0xb8ebdf79d9bcd02b, 0xbc5504e5ac24a436, 0x3fcad5f2d164c2e3),
        (0x38e56bea19f34927, 0xbc48936c18d1eddc, 0x3fbb0cd8a8e55c3c),
        (0x38ed92400a2bdbdc, 0x3c5b395b696820e5, 0x3fc140693b01e9a9),
        (0xb8fffd70b8db6899, 0x3c5c99d008b3203f, 0x3fbb914903a303dc),
        (0x38ff9847e5cd8c92, 0x3c529d114cfdda92, 0x3fbffea52e69bc1b),
    ],
    [
        (0xb8f01ffcbb433d72, 0x3c506aa46436695a, 0x3fcf4fb3f2ad079b),
        (0x393111453a4670c5, 0x3c9156e2a0b1edc8, 0x3ff07dae856b2fa7),
        (0x38d18b47e74f2ab4, 0x3c3537f8d18d83be, 0x3fc0f895b9749073),
        (0x390bf13b4ed4f15f, 0xbc6d84f5dd32d41c, 0x3fcbb9690189901e),
        (0x38c2614f06ac6d62, 0xbc40dd9799fd8f9a, 0x3fbdd9e20b151300),
        (0x38e4303496659dfd, 0xbc68197c44de9590, 0x3fc2a11a70caedc7),
        (0x38f3361d3f0c2f76, 0x3c560696c0d1697e, 0x3fbf4a94dabcc202),
        (0x38f27ea6d226ebcb, 0x3c65720de25e6daa, 0x3fc21af2e890ba7f),
    ],
    [
        (0x38f2b4499db42dd9, 0x3c7784cec5727455, 0x3fd0b04025245ccc),
        (0xb904ae0f068baac0, 0xbc91c32ba20e26c2, 0x3ff08f4f5d0d70aa),
        (0x38ea96ac07d544dd, 0xbc64c4a72ba0f6e1, 0x3fc24b0f036c176e),
        (0x38f251c97e02c12a, 0x3c508dd2a713813c, 0x3fccb42d86f588d9),
        (0x38f0d4275e4a856b, 0x3c668dbb77674bf0, 0x3fc070d5a01a69da),
        (0xb8dea3d868252557, 0xbc63c5fd76f8b3bc, 0x3fc431670135636d),
        (0xb89b444e5011ad01, 0x3bffa62458a50aa9, 0x3fc1c1f9a48cdbc4),
        (0x38fca7942e9fc526, 0xbc548c22eafa21ea, 0x3fc494f7ce56e308),
    ],
    [
        (0xb90a5a2157b90716, 0xbc67f2d0bf1d1630, 0x3fd1b9cb12545e62),
        (0x392633119f0f70ca, 0x3c8b8f8099eeee0c, 0x3ff0a248c0120673),
        (0xb8f69acfeded2c47, 0xbc508bbe1a527ea2, 0x3fc3a9df02a21e16),
        (0xb8ea8290788d4d64, 0xbc662e540192c5f2, 0x3fcdc8356ee43a9b),
        (0xb8eb6c673d37788d, 0x3c502e1d30e22959, 0x3fc21611aebc421b),
        (0x3903d9caf5010644, 0x3c6f1a4e141f2f56, 0x3fc5f7d322705a2b),
        (0xb8f8143393e89db0, 0x3c640b466bb841d7, 0x3fc429f7a4c5844d),
        (0x3903a6fa910f8497, 0xbc6aa587b5fed148, 0x3fc77f4cc7adb84c),
    ],
    [
        (0x38f49cfa9d0edca6, 0xbc761b192e95f88b, 0x3fd2c490af8bde81),
        (0xb919cd450949a9e7, 0xbc833d4689f8eab7, 0x3ff0b6a7a110290a),
        (0xb8de87bf5f070b9a, 0xbc5f1e82279f5c34, 0x3fc51641ec5ecb25),
        (0x38ccb8cb5f1abaed, 0xbc2fa96c1d4d1163, 0x3fcef7b98cc57818),
        (0x38e70e6cb17a7db2, 0x3c4933eb4045a915, 0x3fc3e12a46728775),
        (0x38feede94e364b56, 0xbc5bf6235345e706, 0x3fc7fc0abd9afcf4),
        (0xb8f00981f6b28a16, 0xbc5ae1b181756668, 0x3fc6eab5f2434e4e),
        (0xb8eb8b27ce15717f, 0xbc52c9fc7546b066, 0x3fcaefe373fbc9dc),
    ],
    [
        (0x38bd042d16ce88c4, 0xbc587f647bb796d8, 0x3fd3d0a7c4c4bd9c),
        (0x3910c58d61554f65, 0x3c98b39c91b4e252, 0x3ff0cc7a3cbee4dc),
        (0xb8e22698fd42f242, 0xbc62d49e2d9fd6da, 0x3fc6919065ba45d0),
        (0x38f823dbd10d4103, 0xbc5ec010c2ee5f1f, 0x3fd022a00b919398),
        (0xb8e8e2a1f53628b0, 0x3c427129b7702a11, 0x3fc5d74b4f289006),
        (0xb8865d195f0f0ab9, 0x3c0a869880750934, 0x3fca471b4117af94),
        (0x38726a71383373e7, 0x3bf2e9af6f922210, 0x3fca145040071e97),
        (0x38ec815baeeba0ba, 0xbc4bc383dca35142, 0x3fcf01b4b639f1df),
    ],
    [
        (0xb8db8e519fc1a341, 0x3c5ba77dda083efa, 0x3fd4de2808dce513),
        (0xb92995d78fc5634c, 0xbc8186d2b525ab12, 0x3ff0e3d0384afcf7),
        (0xb90928d24ba5564b, 0x3c66b8642aeb26d0, 0x3fc81d43666e82be),
        (0x38e02e7849cd9d3b, 0x3c439a43a1a5393c, 0x3fd0d9d3ffe723f7),
        (0x3903277984f43681, 0x3c6f996c2532ef4a, 0x3fc7fe65d0430f6d),
        (0x38e1fde21b554ec8, 0x3c6054b1ddd7e19a, 0x3fcce3bab5c2894e),
        (0xb9084d324b2b1021, 0xbc6dd06fdb36d7ba, 0x3fcdba2a828dda52),
        (0x390a6faafa3392e4, 0xbc74c511a36de297, 0x3fd1eb05399ef3cb),
    ],
    [
        (0xb9095debec63ead9, 0x3c7feb5a76d36567, 0x3fd5ed2a392bb50f),
        (0x393c076ce28cd78b, 0xbc9aa7481d4dd1b1, 0x3ff0fcbac3d7a7ff),
        (0xb8fb16a5a93199b6, 0xbc5b8011d18af63c, 0x3fc9baf8afe34c8e),
        (0xb8f1782d46c4fe17, 0x3c5fd47b13ecc6b9, 0x3fd1a31b30440bbe),
        (0x38f327292515d407, 0x3c62e511162665ab, 0x3fca5d546b0f4477),
        (0xb8f9ff5812769887, 0xbc54dcdac4fc60b1, 0x3fcfde9f7d924161),
        (0xb91482fdc7ca2e63, 0xbc7803958d8dba1e, 0x3fd0f9dc067d9b3f),
        (0x3917eba4d2061a0d, 0x3c7c3e9349fe9d1e, 0x3fd4cb1454513f0c),
    ],
    [
        (0xb8fa09aa2980797b, 0x3c7cc49c4fdd8042, 0x3fd6fdc83364f719),
        (0x390d900527fe3d61, 0xbc6da878ef89f086, 0x3ff1174cc1cbadc0),
        (0x390a15a5dbe9e569, 0x3c6ba63a4a393b9a, 0x3fcb6c77f3e7bca2),
        (0x390dd28c6282226b, 0x3c7b4f467d6ea73d, 0x3fd2805335250db9),
        (0x38e82f8de56402c8, 0x3c5e224b2c84919a, 0x3fccfc077a4653cf),
        (0xb900dcf63d16f2a8, 0x3c6b2b747c183f20, 0x3fd1a3768f15ab37),
        (0x391e925960d5ffe2, 0xbc74e1f0dffa06a8, 0x3fd36ebbdef26e00),
        (0x39095086f9496e0a, 0x3c65ff45e78be099, 0x3fd83aba406820ca),
    ],
    [
        (0x38f4162bf16a839d, 0x3c51db04b2b75f1f, 0x3fd8101d121bed2d),
        (0x391d0f2b8bbbb944, 0x3c89d37cd9797ed3, 0x3ff1339af3aaa4e8),
        (0x38bf9d769bb3ef77, 0xbc32a06b80e2cac6, 0x3fcd33b8cc4e63e5),
        (0x38b6f93faf159a6b, 0x3c2455313f955afc, 0x3fd3739e2fe0aea9),
        (0x38fa39de3f40bcc1, 0x3c6fd5c66565373d, 0x3fcfe3bab1f37947),
        (0x39140c5ea9044a71, 0xbc7a7face92b41c3, 0x3fd3975de382fefb),
        (0x39182b809db94260, 0x3c72a28ca0bd66fb, 0x3fd64d1a95c2c394),
        (0xb905eb90996c6ac4, 0x3c7f3af7d371a8f1, 0x3fdc5a217abbd278),
    ],
    [
        (0x3910c41279c9691f, 0x3c7f2cb742770a5c, 0x3fd924454c462cc4),
        (0xb930e0b55154d457, 0x3c99b1542bbd420c, 0x3ff151bc2d5eb868),
        (0x38e0d9d5a0243a90, 0x3c5eb063095f3181, 0x3fcf12e9abc9c861),
        (0x391e001a1534bcb6, 0x3c75e0e23f600082, 0x3fd47f6e2294c4c6),
        (0x390905a218ce740a, 0xbc7c59c9310e53cc, 0x3fd18f9b4e9f6567),
        (0xb8d0dfc1183987a7, 0xbc4928da56ebf0eb, 0x3fd5d5e0fef63957),
        (0x38f86fdac278986e, 0xbc52a00a4e76a512, 0x3fd9aa520a18c947),
        (0x39091b43170b0a8b, 0xbc8a9465d9a7f03d, 0x3fe0a8e1f2691c8d),
    ],
    [
        (0xb90ce8f124313846, 0x3c6a2f7c3ea46d69, 0x3fda3a5ed82d9537),
        (0xb92658ff494aff78, 0xbc8f473dc452cb2c, 0x3ff171c990040746),
        (0xb88af299dcd693d8, 0x3c418e6b164eadf9, 0x3fd0863bfcabf1b7),
        (0x390f21090f5f7032, 0xbc7d9e467fe4df6d, 0x3fd5a6928d510eb8),
        (0x38e403fefb71e400, 0xbc6e65721ec9a765, 0x3fd35d90810095dc),
        (0x38e52ca194328e9b, 0x3c58a9df100cf7b2, 0x3fd86c1517110ad3),
        (0x3911d0010dc9ffbc, 0x3c7726bf7d67f141, 0x3fdda0b953f74155),
        (0x38f18244f4e3b0ca, 0x3c5bd4a3acd1d25e, 0x3fe3aa6cc076df58),
    ],
    [
        (0x38fba70b22f51cc0, 0x3c674049ce3d99e1, 0x3fdb5289525368ab),
        (0xb90620d81db63c0e, 0x3c72a4de2a90980d, 0x3ff193decd7d6651),
        (0xb9007c5f908ac523, 0x3c6226fad72be0cc, 0x3fd1918cc962cd31),
        (0xb90851af7b806423, 0x3c7670d140822aa4, 0x3fd6ec48d6a30f4d),
        (0xb8f9cd4383cee52e, 0xbc766770981288fb, 0x3fd563300937888c),
        (0x391c96c21ac8927f, 0x3c7f21cfb1756616, 0x3fdb69d07b907ce7),
        (0xb90ca5460da00a58, 0xbc8b5ee6c749b9e0, 0x3fe1287e56b76b7b),
        (0xb913739458873d76, 0x3c84afac58adb1df, 0x3fe7524a4f7f1f02),
    ],
    [
        (0xb8dac0decfb6d7ae, 0xbc5a252213096b1d, 0x3fdc6ce628dd132c),
        (0x39366ebc5aeb5722, 0xbc94c90b7ad2ea26, 0x3ff1b81a765da37a),
        (0x38e656098c611364, 0xbc49c8eb8928ff93, 0x3fd2acec0080207c),
        (0x38f2759bda0a3974, 0x3c7f5ed70883eb71, 0x3fd8545029578832),
        (0xb8df851c5c7b28d9, 0x3c63f582f45dbfb8, 0x3fd7a94abf5bee52),
        (0x390ee4b222d0560b, 0x3c7b963b9a0bdb74, 0x3fdee256abe676e6),
        (0xb8f00209ab6dbf6e, 0x3c522b25297f7559, 0x3fe3f1ef40cf747f),
        (0x391077cddbe0908e, 0x3c71d93c8bbf8d74, 0x3febca3ba10ab1f0),
    ],
    [
        (0xb90f89e235415c0d, 0x3c7885cf38c7579e, 0x3fdd8998cc3e6049),
        (0x3936cdc0a6d79af7, 0x3c9a8e072e23bc8a, 0x3ff1de9e5403c408),
        (0xb907b501c48e37be, 0xbc61aeaa2cde11a0, 0x3fd3da0edd75f233),
        (0xb8de2f1f98916719, 0xbc498033c2dd66c3, 0x3fd9e3019fbce473),
        (0x3914c5100444e03f, 0xbc70115f307db90d, 0x3fda3a5c02eb8827),
        (0x390d5be2d9c0e487, 0x3c807d05750aadbc, 0x3fe1769a69394475),
        (0xb8cd3145f98c8e69, 0x3c5b7931cf1d4777, 0x3fe74642f2a5a903),
        (0x39252dd818016ace, 0x3c8309f4e09207d1, 0x3ff0a40b2785e4bf),
    ],
    [
        (0xb900686df9da48d4, 0xbc76a70e7b5a472c, 0x3fdea8c6e5f5e67f),
        (0xb8dc26a35b8a613b, 0xbc3ecc5308781324, 0x3ff2078fd1307479),
        (0xb8c1dc3e8495014c, 0x3c252dbd95bd03d1, 0x3fd51ae2f53ae20f),
        (0xb90c5c6f493a3abe, 0x3c6b10b26f29484c, 0x3fdb9d6dd19b71ef),
        (0x391e5d47e425a6c9, 0xbc7991e4782dd5b3, 0x3fdd22ea1dbccc5b),
        (0x3913d69e25ac3e79, 0xbc77fdab4feb192f, 0x3fe3d3af10a789a7),
        (0xb8ea1aa61728a651, 0x3c4e400049a1ba2f, 0x3feb45c65f382823),
        (0x38fbd94bb7bd73cd, 0x3c98049b9d60759b, 0x3ff408dfb1618a8b),
    ],
    [
        (0x39098fa2c28fb4ca, 0xbc610e104cee0e3f, 0x3fdfca989658baaf),
        (0xb914d2e64f0b1c2c, 0xbc9c82f08483f1c2, 0x3ff2331873dcc1de),
        (0x38ba80a7ee2974aa, 0x3c32b22adfe547ab, 0x3fd67197a297a074),
        (0xb8e4674fa5e8f416, 0xbc7421eb3616e200, 0x3fdd89812a8690c4),
        (0xb92c069098d0a669, 0x3c8c6f4d4e04cc35, 0x3fe0390003784022),
        (0x3915b2c9542076ed, 0x3c7b584ec622173f, 0x3fe69a4e9287e745),
        (0xb8ed9d9607f48c3e, 0x3c9ca15d281939d3, 0x3ff00cc4fa230477),
        (0xb8e3fade3a29b1b3, 0x3c7610bc0afc4584, 0x3ff84150c2ced4cf),
    ],
    [
        (0xb9246d6eeed17253, 0x3c8d8e763d34303b, 0x3fe0779c5d4df4b8),
        (0xb9285a3fd2514ff2, 0xbc888616d2ad4929, 0x3ff261666bbdd21d),
        (0xb8f8e5b2753f3a92, 0xbc581adf79bf6aec, 0x3fd7e0a958059501),
        (0x38f17e175d8f4bdb, 0x3c7825e1d9f01054, 0x3fdfae30d92dc61b),
        (0x39140b5bb06623a3, 0x3c8b22b16d4b3634, 0x3fe21ce41d86e43e),
        (0x391a861acad00f3b, 0xbc87fe14b612bea4, 0x3fe9e0bb7f64ddfd),
        (0xb92d9315d96d347f, 0xbc944acede2bfcd7, 0x3ff2fb102493e527),
        (0xb915e0d2abbb123d, 0x3c78b1b29ee353b1, 0x3ffd899e8d67de28),
    ],
];

/// Orders 8 to 21 of the same expansions, double-double.
pub(crate) static ASIN_POLY_DD: [[(u64, u64); 14]; 31] = [
    [
        (0x3c1dadce49950be5, 0x3f7a71fffddfaf5e),
        (0x3c05df21a751f78a, 0x3f9fce9dcda5db63),
        (0xbc0bebf4ebae3b9d, 0x3f77e34f9936552e),
        (0xbc367a3f9e89bc67, 0x3f97ad25c8494aaa),
        (0xbbeeaed10e356bec, 0x3f75fe4fa8311478),
        (0xbc12e04b0bd40e94, 0x3f929a4200d99432),
        (0x3c1cbb95601b099e, 0x3f7486e42a39cf98),
        (0xbc02aff545a6283a, 0x3f8e64162185f10b),
        (0xbb92900f2c1a5c49, 0x3f735b384f37bfac),
        (0x3c2b248fb17aa76d, 0x3f8991381baaa4d6),
        (0xbbdc74dec985f509, 0x3f72669c62da2c2e),
        (0x3c2055810330f82e, 0x3f8603afa57cf6d6),
        (0x3c0fb042ef0907cc, 0x3f719b9c81d00ca0),
        (0xbc01d9fdc8d38b2c, 0x3f8350d2d6e7ebae),
    ],
    [
        (0x3c1e0bd9ccb1a057, 0x3f86546d8d346a27),
        (0xbc017a90e722b7e4, 0x3fa088229639973e),
        (0x3bf850c04300191f, 0x3f844d1b412f303a),
        (0x3c34ae43ba1e3344, 0x3f9911e6fa0beb13),
        (0xbbc62a71888aabe1, 0x3f82d601da69c96c),
        (0xbc1c44c8d2bfb502, 0x3f942079e7b3dec3),
        (0xbc1cca63f64fad00, 0x3f81bcf5bc71c445),
        (0x3c3c5ae13718c2f1, 0x3f90d8bd8a916ecc),
        (0xbc1d2af1184b834e, 0x3f80e5bdeef5e157),
        (0xbc29ae446a066f16, 0x3f8d1e8d838c90bd),
        (0xbc04676a0249c3d7, 0x3f803f1f52fd625c),
        (0xbc21955134f41312, 0x3f89d0ad960d8019),
        (0x3bfe61d3cc582b7b, 0x3f7f7bdb6438e9e5),
        (0xbc080600a651d60e, 0x3f875dcb1a207bcf),
    ],
    [
        (0x3b79b73eb44b67f8, 0x3f8fe255c66be7de),
        (0xbc406dc673f28b29, 0x3fa17f5c1aeb82be),
        (0x3c21ab9d423c18c9, 0x3f8d447f3eeee590),
        (0x3c2e487ea92afa02, 0x3f9b3b98cfd08b17),
        (0xbc2d0fb1f8b5bb6f, 0x3f8b7792221ff712),
        (0x3c163ccea77e4d99, 0x3f9684dde99d3001),
        (0x3c2f992c05d0ece9, 0x3f8a3575144f79dc),
        (0xbc06aec3e4cfb043, 0x3f93787bc8f295a5),
        (0x3c2391d8d0d92232, 0x3f8956ecf92c2b2b),
        (0x3c3ca6b9cb008a30, 0x3f916bfc105770a6),
        (0xbc0bedf8c5be9f73, 0x3f88c44094d05e54),
        (0xbc0ac55a5dc58908, 0x3f9004708ad0a74c),
        (0x3c1cf159e9b4758a, 0x3f886e4d71cd590e),
        (0x3c20ea244ed716c3, 0x3f8e1b1a76816a23),
    ],
    [
        (0xbbeb7a7f77b01f05, 0x3f950aa4d5224ee3),
        (0xbc1693c03650097e, 0x3fa2d47179d0b725),
        (0xbc3a24b9a6b6d903, 0x3f938fa585c5ddaf),
        (0x3c2b741e01b433ca, 0x3f9e41aa257f7cf1),
        (0xbc21f872e394fa51, 0x3f92a255d539cc3d),
        (0x3c3fbee2b22fcdd6, 0x3f99ea14089b2c17),
        (0x3c1ecb193aeb7306, 0x3f92162f18ddd3ea),
        (0xbc2fe3b39777756b, 0x3f97424c5a89676d),
        (0x3c11b84dac10b8f4, 0x3f91d2b2c6686e2c),
        (0x3c2435cd7487db60, 0x3f95a1d2e3f22221),
        (0xbc27a8a53b58e0c1, 0x3f91c9880db8bfdf),
        (0x3c3c48aef972630c, 0x3f94af973e78ab2f),
        (0x3c377d9552ecac0c, 0x3f91f209970ac024),
        (0xbc3163d2ac6db14a, 0x3f94392c2e3ae372),
    ],
    [
        (0xbc16b54fe17df034, 0x3f9a926ef4735a44),
        (0x3c404f0ad1c5f31a, 0x3fa491d10ed080c7),
        (0x3c342f8f19434193, 0x3f991754677859fa),
        (0xbc3565915c476459, 0x3fa122af25369f78),
        (0xbc316efa700e7d95, 0x3f98579cfe7cc685),
        (0x3c14fb9ec7619e64, 0x3f9e82239d30b07d),
        (0x3c2340c63ee84a88, 0x3f981ea6af64f440),
        (0x3c3091b8b9bfeea3, 0x3f9c7e506b63ae2d),
        (0x3c3327a0ebdc9da2, 0x3f9850c7394a3e98),
        (0xbc38db7ab19687ab, 0x3f9b958874623f2b),
        (0x3c39970bebca2696, 0x3f98df3d92d5b61e),
        (0x3c36eda4545dd045, 0x3f9b7312099fea50),
        (0xbc1e2e52f27f9019, 0x3f99c2cf2024dc58),
        (0x3c2033113d4cfcbd, 0x3f9be93931a1517b),
    ],
    [
        (0x3c47545b5a108658, 0x3fa053dd4a6185ae),
        (0x3c4ddf4b44c80379, 0x3fa6c5547044f072),
        (0x3c2ebe8005beb55e, 0x3f9f68931746fe21),
        (0x3c1d2e5a5ae27942, 0x3fa3b9dbe6469bdf),
        (0x3c3e9e2fc5cfab46, 0x3f9f209b6e324b19),
        (0x3c3498ee3ebec383, 0x3fa24917b0feb6de),
        (0xbbcdc5a13aa7a6f9, 0x3f9f962e73b2f9e0),
        (0x3c3f32251aef9ee3, 0x3fa1c94252d5fa42),
        (0x3c4f3182582522f1, 0x3fa0572e0b653652),
        (0x3c4497e06b211bf8, 0x3fa1ec8c24392a43),
        (0x3c3306e87ebfd80f, 0x3fa12f69505c0a61),
        (0xbc4f4bb966a0f37a, 0x3fa28d874cfe2b23),
        (0x3c4d61d608eed402, 0x3fa253dd825fe9e6),
        (0x3c4ffae3e1f7f9b7, 0x3fa39b10be77e41f),
    ],
    [
        (0x3c4536ddf4a8a730, 0x3fa3b7157f763794),
        (0xbc3066005d040fed, 0x3fa980dbe957a461),
        (0x3c3801371d6a0a3f, 0x3fa35dcb26e8df6e),
        (0x3c47e67251273699, 0x3fa7040f670cde58),
        (0xbc30670b22caf653, 0x3fa3a95c0ac97345),
        (0xbc35a5c6b36b181c, 0x3fa63bdd5675f7f7),
        (0x3c4054093187f295, 0x3fa47d92ffb7ad09),
        (0x3c14e20b06bc148b, 0x3fa6864594c04f7a),
        (0x3c2fc5f9fd3f6291, 0x3fa5d15bc55683f3),
        (0xbbd763f84519200a, 0x3fa79e7e03e31dcf),
        (0xbc4f56c98bf5ebac, 0x3fa7a6ebc401f4a5),
        (0xbc47c9ed8c13c3c5, 0x3fa969e4cc819a17),
        (0x3c4000d160cec668, 0x3faa08993cdbd38b),
        (0x3c4106ddd5d5b80e, 0x3fabe4790ac55ef9),
    ],
    [
        (0xbc1fe15f58094446, 0x3fa78789724bee36),
        (0xbc1584aa83702de2, 0x3facdb1bb5d29fcf),
        (0x3c196f5ebd71102d, 0x3fa7aa228cfe103e),
        (0x3c0f267d215e3709, 0x3fab27fb58b597f5),
        (0xbc4d66968a94ae87, 0x3fa8acb5d6302cd9),
        (0x3c45a5b76a86092c, 0x3fab57fdc9808a7c),
        (0xbc34010d88c287cb, 0x3faa798a826ab6a5),
        (0xbc45a752f7195331, 0x3facd7d3a861d718),
        (0xbc4142fb10f6b4cc, 0x3fad13bf6a464395),
        (0x3c356eb0bb635dd9, 0x3faf74c590535159),
        (0x3c4f4a51f1de8eae, 0x3fb0479ef23db7f7),
        (0xbc5052cbdcbaeeec, 0x3fb195716f664cf8),
        (0xbc41ddcec0abaa68, 0x3fb28720ed1e032d),
        (0xbc486608afdf279d, 0x3fb4097a75d97f3f),
    ],
    [
        (0xbbec6021494a9874, 0x3fabdd79fa3f5210),
        (0xbc551aae3fb583b2, 0x3fb07853b333b729),
        (0xbc4255bb44a7a61d, 0x3facc2da4b953db8),
        (0xbc56320d47199519, 0x3fb02bdac464fb9c),
        (0xbc481f61b84d8c45, 0x3faeded4c19d24b6),
        (0xbc5677a5bc03e1c8, 0x3fb0f87cd6533f79),
        (0x3c5bd817fef1db61, 0x3fb1165badd42452),
        (0xbc4cdf2c94f8f602, 0x3fb2a227f6e20f87),
        (0x3c44d51e3132ffdf, 0x3fb3652ba351be00),
        (0x3c3b7ee437b299c3, 0x3fb5210e4450f0f3),
        (0xbc2316f030dd7183, 0x3fb6789d75c36738),
        (0x3c46ec76a1c59d1f, 0x3fb88a3613dcae67),
        (0x3c5d0b4ed786e4d9, 0x3fba7b63ef9dfe4d),
        (0xbc40b5ffaa4124e6, 0x3fbd085820274442),
    ],
    [
        (0x3c573c3a26aadad7, 0x3fb06ad5110119c0),
        (0x3c5576ec69190dd7, 0x3fb2f2a60526e401),
        (0xbc5a3d9862d365e0, 0x3fb16da61f827628),
        (0xbc5e8e14e4d77bbf, 0x3fb369f5d2be74df),
        (0x3c429aecf39a6c33, 0x3fb34becbbf919fc),
        (0x3c59cf39f2cc2c30, 0x3fb53b1538df759b),
        (0x3c5d8601b2f516f2, 0x3fb614fad2dfbe51),
        (0xbc57221bbd33a3a5, 0x3fb84282289ccc88),
        (0xbbedd356bbdcc5a0, 0x3fb9f2293c243ab9),
        (0xbc5c214e6e40f52f, 0x3fbc999840198668),
        (0xbc559eea6f44b90d, 0x3fbf25a9835162ac),
        (0xbbef8e3304712278, 0x3fc14147bc436dcb),
        (0x3c6dc4e856f62019, 0x3fc30720142c0873),
        (0xbc52d946f98581f6, 0x3fc5330126df1192),
    ],
    [
        (0x3c4e16e0f622b1cc, 0x3fb34940ab5c7dea),
        (0x3c54431934384e7b, 0x3fb5f2e7a48a411d),
        (0xbc5eb9b047c1871b, 0x3fb519be8ff8223c),
        (0x3c0322a918733ca6, 0x3fb778145266572c),
        (0xbc5dafcb2772ae8f, 0x3fb8250fc2640b46),
        (0xbc5900ca08dd7403, 0x3fbabe2c19e00868),
        (0xbc52a6f15155d15e, 0x3fbc9bb5d0d6e38b),
        (0xbc4537d29d8a62af, 0x3fbfcd28de9eecc1),
        (0x3c65f61779bf4569, 0x3fc16c3f293a1563),
        (0xbc6aa22b1c322df6, 0x3fc37dc8d0dda3fd),
        (0xbc670aa2a3adc970, 0x3fc5b28fd4137690),
        (0x3c54d8c0710cd221, 0x3fc8711e8cf54c83),
        (0xbc6baed0cdd22a68, 0x3fcb8369bdd0be64),
        (0x3c657dc718357056, 0x3fcf326e2caa3c49),
    ],
    [
        (0x3c59f1b9b7875727, 0x3fb69eba9ef52c8c),
        (0xbc545d97a49fb53f, 0x3fb995187fc32ba5),
        (0xbbf05eb4c9499960, 0x3fb98de9049fef35),
        (0xbc4bd3ba8467026c, 0x3fbc8c450de37c00),
        (0x3c517524256346b6, 0x3fbe458efd68b034),
        (0x3c504985e5ac6370, 0x3fc0f2bf8903dc8d),
        (0x3c5ded4e8fd8f01c, 0x3fc29898d9a027a4),
        (0x3c57a48cc39d8393, 0x3fc4fa297e8b35d6),
        (0xbc6fc1eb16acc450, 0x3fc782772d75b354),
        (0x3c69c7ff7aafd90f, 0x3fcabef1f060a11b),
        (0x3c488029a8701c02, 0x3fce67af8f1a6e3e),
        (0x3c6dab7b30fc1cb3, 0x3fd16f6e9f795639),
        (0xbc72ca9c1741d5d1, 0x3fd406a32cdd3e22),
        (0xbc7598db4fa58a62, 0x3fd721e0d8c06116),
    ],
    [
        (0x3c5dc7e82c2700cf, 0x3fba846818e255c3),
        (0xbc4fcc10f86777bd, 0x3fbdfc4b745ed3b6),
        (0x3c435ae9cee52ac5, 0x3fbefcf4e7d4a069),
        (0x3c4b5389ff9712f7, 0x3fc1765a05d72340),
        (0xbc674a4e512b1484, 0x3fc307de4225cc5e),
        (0xbc6e624a5dc1c1ec, 0x3fc59baf832e7fac),
        (0x3c647fdccf1080bc, 0x3fc846d59d4ab01c),
        (0x3c52e2f52c2f8f23, 0x3fcbd89158d3d89d),
        (0xbc6169736a124450, 0x3fcfe421db6925d5),
        (0xbc5c3c2c93e04a1f, 0x3fd278fb06531ec7),
        (0x3c6ddd37b085b81b, 0x3fd57009109fe938),
        (0xbc718c99b592967a, 0x3fd90dfeffe81b95),
        (0xbc5f28d868a32282, 0x3fdd5cafabebc00d),
        (0xbc773a0a4fc4ead4, 0x3fe149b5743b98b9),
    ],
    [
        (0x3c3bcc6636c3ced6, 0x3fbf18f7ec8d61d6),
        (0xbc6a04e5856f86ed, 0x3fc1aa45d7345f79),
        (0x3c67894c55b1a7ca, 0x3fc2d3bfa6054722),
        (0xbc501f6f0bb58aa0, 0x3fc57a69472f785d),
        (0xbc686577c1261cc2, 0x3fc802e1bcbc13f0),
        (0xbc697930713e71f6, 0x3fcbb4cb7d86147a),
        (0xbc4cb8810ff52bba, 0x3fcfd775b406b327),
        (0xbc7aa7b885cffb75, 0x3fd2987f8bc130ba),
        (0x3c730695b46fca8b, 0x3fd5c1422cf6e791),
        (0xbc75443d626be219, 0x3fd9b06249ff5d85),
        (0xbc5aaef93083f2ec, 0x3fde6ebfdf410df6),
        (0x3c8e78a8ccb89f54, 0x3fe222abf26ce625),
        (0xbc58f4d6e0544cf9, 0x3fe5b04087cb58f3),
        (0x3c8240fc286f2f8f, 0x3fea0cf7e8d4b46e),
    ],
    [
        (0xbc6e47539782c52c, 0x3fc241080008b698),
        (0xbc63ecaee7dcfb1f, 0x3fc4eaaaa6f5729f),
        (0x3c57b8e3e92608cb, 0x3fc6f0164bde850a),
        (0x3c3bb845c1b7e720, 0x3fca8e291c315657),
        (0xbc50671e2d516ae7, 0x3fce6a84e2ffe7fd),
        (0xbc7cb1e8a92330cc, 0x3fd1dce4cf6588d8),
        (0x3c6830a97d7ac240, 0x3fd4fd3884f624bf),
        (0x3c79ca16058d6131, 0x3fd8fdbcaebd8936),
        (0x3c51ca6bd987a9d7, 0x3fdddcec5bcb8fdc),
        (0x3c819ba3442099c9, 0x3fe1fc534a4114c0),
        (0xbc6ff76d90744017, 0x3fe5c0e2fcf1c5f5),
        (0xbc8cb509b0a16676, 0x3fea7480fb1b467c),
        (0xbc3e1603c9686237, 0x3ff025c4eddc274d),
        (0x3c705fdcd917e46c, 0x3ff3cb0b41a2cd43),
    ],
    [
        (0x3c631ee6e5ff746c, 0x3fc5771064c87bd1),
        (0xbc419ce078f2f9c6, 0x3fc8e268db803895),
        (0xbc5579645d1a684c, 0x3fcc08a4ec8e9241),
        (0xbc72158cafd896fa, 0x3fd080298b37ae2e),
        (0x3c7e54a79f8c0ed2, 0x3fd3597e9021a039),
        (0x3c732f8feaec0e2f, 0x3fd72a05c2b86e57),
        (0xbc7436676b1c08be, 0x3fdbd2bce9d254fc),
        (0xbc8398a1c958d514, 0x3fe0e663a513c399),
        (0xbc872008d9eca27e, 0x3fe4a12199e6eb22),
        (0xbc7c8e2bd2402fd6, 0x3fe95d3648f3c46e),
        (0x3c7e2dd03e9228b5, 0x3fef545973ae7fe4),
        (0xbc75ca73ca769d75, 0x3ff372ea4aa29cdf),
        (0x3c8d160e90db9127, 0x3ff83e6f896cd766),
        (0xbc661fe22011adf9, 0x3ffe57618ca6d089),
    ],
    [
        (0xbc11b0df9819c4d0, 0x3fc94b5f63227ca6),
        (0x3c6e05b7ca6052e0, 0x3fcdbe0cba3d1cda),
        (0xbc7fc18e6f7aba84, 0x3fd131165275a942),
        (0xbc7be6405213cd91, 0x3fd49c81e586c517),
        (0x3c5f445f8bb49ae7, 0x3fd8bc84b3404119),
        (0x3c43c06557208ef1, 0x3fde3679b1a2414f),
        (0x3c87e70aa596d657, 0x3fe28c82306aefea),
        (0xbc8034300dbde959, 0x3fe701b9baa8eab8),
        (0xbc82885ffd469112, 0x3fecb2306e1bbdb5),
        (0x3c356d29da761c63, 0x3ff20458ed5d6297),
        (0x3c89e93aa100a0f9, 0x3ff6bc43da056828),
        (0x3c85b3fe50790f04, 0x3ffcd51c7338005e),
        (0x3c9343f0d6d1bc86, 0x40025b8c9a448dd2),
        (0x3ca2243196419bcf, 0x400777cd4d25b2b1),
    ],
    [
        (0xbc5a745833690df2, 0x3fcde1d65ba6c58b),
        (0x3c71223bd06dadcc, 0x3fd1db357e7b8004),
        (0x3c742e74a06c2ea2, 0x3fd52b1073f23c95),
        (0xbc72f9f3103f9ff8, 0x3fd9e159c7b2a39c),
        (0x3c7eedfee52e678f, 0x3fdfc8baadf96f7b),
        (0x3c7b6a1a5c272eef, 0x3fe3d20e75ddd015),
        (0xbc8f3e43be66c673, 0x3fe8e25b3e211153),
        (0xbc8a7da4c536eac7, 0x3fef887f8aa19387),
        (0x3c83aa9e122f3fa8, 0x3ff419e687ab72b2),
        (0xbc87985c4cda1434, 0x3ff9cb039168a4f1),
        (0x3c8a5a72b2097bf2, 0x4000a1f1110b5f4f),
        (0x3cac257f3a383cb2, 0x40058e3e0843beb4),
        (0xbca47d66a3f2ca2b, 0x400c0d7c772b0c26),
        (0x3c856067c25f0eed, 0x401253209aad50fe),
    ],
    [
        (0xbc5ebd731c244461, 0x3fd1b3b419fd173b),
        (0x3c7518519f0cc113, 0x3fd58a2ff23b7cfc),
        (0xbc795b07ce2ffe40, 0x3fda2cc908fc4a5e),
        (0xbc84b7fe4d34a050, 0x3fe055aa600f7114),
        (0x3c8d12f37c520edc, 0x3fe487c51f87ac51),
        (0x3c83a55206f8af79, 0x3fea2a834452fb70),
        (0xbc81c82c2185a69b, 0x3ff0ccbe1037470f),
        (0xbc7ef37ce38dd72b, 0x3ff5c33efe0c69e3),
        (0x3c7c4e9ac7824dcd, 0x3ffc5f408584ce49),
        (0x3caba421ee45619a, 0x40029c55671c9a03),
        (0x3c9b563a9fc2705a, 0x40088acfc172712e),
        (0x3c9eadc17d209973, 0x4010429953eeba8c),
        (0xbcb5c4eab1134aa1, 0x4015a303587f6a1c),
        (0x3cb1bb20c05c9ee2, 0x401ce6f92cac3920),
    ],
    [
        (0xbc7f9a0a832dc853, 0x3fd50a581dc776c2),
        (0x3c72345b58af3de8, 0x3fda1ae974c28b5d),
        (0xbc856152b84f29bd, 0x3fe041a889f83ca5),
        (0xbc61ce678d717022, 0x3fe4bb984762c2e4),
        (0xbc8820c87fd8d4c7, 0x3feaac891d324c21),
        (0xbc9d4d7e5faff4e0, 0x3ff161d61a4b50bf),
        (0x3c982a2a33ccaf09, 0x3ff6d67f22031222),
        (0x3c90eb7b1d063243, 0x3ffe42bf14ac79ca),
        (0xbca315a0221eabca, 0x40042e1d12cf5c4c),
        (0x3ca5f7d40bb4d425, 0x400b14eb17f21c8d),
        (0x3cba1152c0051b25, 0x4012446ee7ce78fa),
        (0x3cb56692a07d2ac6, 0x4018c2f6cab8d371),
        (0xbc9e94e2e17751a5, 0x4020da77c55c8fe3),
        (0x3cadfdbe2ad557d6, 0x402707ac1fbc76c7),
    ],
    [
        (0xbc4f2a15c066aa36, 0x3fd918ad9e49103f),
        (0xbc7c08d1ef27b078, 0x3fdfca3bef977d4c),
        (0x3c8ad2200bcd4747, 0x3fe44a6269e467c2),
        (0x3c7fa6519edc15f4, 0x3fea7701f5b1bbdf),
        (0xbc9a17a7fb37b517, 0x3ff16eaeeb48e60c),
        (0xbc9a8dc98307069c, 0x3ff73f8adce9b204),
        (0xbc91655a2039fb9a, 0x3fff44846d4e49b3),
        (0xbca28b2fe3137843, 0x4005336864c0e8ad),
        (0xbc95b8cb2c10b85e, 0x400cf15d397f677d),
        (0xbc96bd40337b3094, 0x4013e08238d4c154),
        (0xbc8befae60d865b4, 0x401b72378467810c),
        (0xbcba675b8936385d, 0x40230a0cd57c3d0a),
        (0xbc90f4433c3f42a3, 0x402a86ea479c9bf3),
        (0x3c97f0674ddfc22e, 0x40328cfee34f83e5),
    ],
    [
        (0x3c6a46dc5a8bb100, 0x3fde0c5651d32f29),
        (0xbc85fe4b0b58a0f6, 0x3fe373bdec47efe3),
        (0x3c6c4d0a78926e6d, 0x3fe974a96176e50a),
        (0xbc96e4be7098d959, 0x3ff0fda76a2facae),
        (0x3c546fa44e87d56c, 0x3ff6edffa07429e5),
        (0xbc2d04edb827186f, 0x3fff4f9356c77eb4),
        (0x3c817f4fd6385a39, 0x4005909177cdc834),
        (0x3c84c4a07e499d60, 0x400df254196b53e5),
        (0x3c47e33bfb7fa2cf, 0x4014ef1e27bb352b),
        (0x3ca2282e4d714e99, 0x401d72267e27f1f8),
        (0xbcca020e5a4048ed, 0x4024d1bed5ffc904),
        (0x3cabffc03e16e423, 0x402d948a2298ff23),
        (0xbcd0dfa95b41a7a6, 0x40351a6dba185f7c),
        (0x3caad77845307ece, 0x403e3a093f905f99),
    ],
    [
        (0xbc8e97bfabaffc62, 0x3fe20fe192f550b5),
        (0x3c8778ea86d37886, 0x3fe7ed5c9126b020),
        (0x3c9473c26cfbbf7c, 0x3ff00df63ade7a64),
        (0x3c95541af8ee1558, 0x3ff5f39734649866),
        (0xbc90868b0882eb6a, 0x3ffe5c95cda7419b),
        (0xbca7ed07aed04d89, 0x40053d27a27f1cf5),
        (0x3c81dc42005b57ef, 0x400dfab9a2f8cfd6),
        (0xbc9e8e94bde31330, 0x401554407b9a5346),
        (0x3ca5f3696507ee1f, 0x401e8e787ab11427),
        (0x3cbf6695fcf5a21d, 0x4026054f56e1c7db),
        (0xbcb9f4977772f929, 0x402fe85dace1b04e),
        (0x3caf8a0945bc2222, 0x40373a114d330bad),
        (0xbce61973b307304e, 0x4040fac97a656ddb),
        (0x3ce9df80c3cb8eef, 0x4048ebb51a3aee98),
    ],
    [
        (0x3c8b5f8884c5cb84, 0x3fe5cf20936430b0),
        (0xbc8ea9315d9f89b4, 0x3fed96acc58985bc),
        (0xbc86896f48b6a336, 0x3ff45dea5da392d3),
        (0xbc865808c7157863, 0x3ffc8b418144c9aa),
        (0xbc9f918177da7301, 0x40043e03798b6bed),
        (0xbc79c9936dfcccf4, 0x400d08d8a895b904),
        (0xbcb4936ad168c7c0, 0x401502c9a24ea381),
        (0xbcb58edfee3a8944, 0x401ea71d8955c3f9),
        (0x3cafd7da06d56ee7, 0x402683453a0824cc),
        (0xbcd1d0e6438b4b51, 0x4030a26e641a7ea1),
        (0xbcdbc1eb910b877b, 0x4038b6932d87219a),
        (0xbce70b9ef384fdde, 0x404271ea0dbc8735),
        (0x3cef55026345ba69, 0x404ba68478c8d95f),
        (0xbcfb552b6d025248, 0x4054cdfd71f11167),
    ],
    [
        (0x3c8e7d5404386349, 0x3fea74ba36bbafd0),
        (0xbc972e0e10e6450f, 0x3ff265816a8ddc7c),
        (0x3c991c60110fff04, 0x3ff9fe71bb3d11b9),
        (0xbc7551737d93e09a, 0x4002af1d12972775),
        (0x3ca01594abedfaee, 0x400b30c2e8321b3b),
        (0xbcb579208415fb8d, 0x4014017316cdd18c),
        (0xbcab842f477e6f7b, 0x401db4e43055b7d8),
        (0x3cbfc3156e56f261, 0x40263b5b6af7b8ae),
        (0x3cdae59ddd03aeb8, 0x4030c08a0fbe82c2),
        (0x3cc9fe1e4035eef7, 0x40396612f147fd53),
        (0xbce40e892f71d66a, 0x40435b5ab4cd0433),
        (0xbcefd2bcd0fd63ae, 0x404da50d80460f6f),
        (0xbcd84392e4a43ad4, 0x4056cc01d3464a4d),
        (0xbd0a9770ec6860a6, 0x40619922fec9dffd),
    ],
    [
        (0x3c87d7d2d8bedbc4, 0x3ff0203428903cfd),
        (0xbc7662e39896b42c, 0x3ff70254f64eb81f),
        (0x3ca07990b1209d0c, 0x4000b1a1834d5f28),
        (0x3ca1da90159bf858, 0x4008a26ecce3c99f),
        (0xbcbae39f3c2ff4d1, 0x4012676916e97ddd),
        (0x3cb5e1131116e9c4, 0x401bcd7d545f4050),
        (0xbcad69803d0d6255, 0x402531581910f7d8),
        (0x3ccb17a430183c67, 0x4030486d4cd27dc2),
        (0xbcc8d3355b02a4dc, 0x40393172a0e5eb41),
        (0x3cd0e143eb07a18f, 0x40439b800131412c),
        (0x3cedb3a5e035a73e, 0x404eaee2f3f4df24),
        (0xbcf6b27dd260c371, 0x40581f2d40335a89),
        (0xbcfb41b47a65c9cb, 0x40630b5674f5ee7b),
        (0xbd02e6bb9b4d9593, 0x406e2fc4b458aeb8),
    ],
    [
        (0xbc7422f92ed2f8d9, 0x3ff3c2f737a1daef),
        (0xbc946bb9aeddcb69, 0x3ffcf451ab7bb37b),
        (0xbc7c3da65ef9a095, 0x4005964e75261f7e),
        (0x3cbe07e93fe53670, 0x40105cae126763c2),
        (0xbcb8a2764728f5be, 0x40191e34e47be514),
        (0xbcc340336652a4c1, 0x40237ded53b359c9),
        (0xbcb61bda2364f613, 0x402e8796409734a4),
        (0x3cae5eed58f29b8c, 0x40381956c7317c1c),
        (0xbceb14901b2cefd6, 0x4043275d3a5b4777),
        (0xbccdeae347a8be12, 0x404ea1749576001a),
        (0x3cf905e80050595b, 0x40589f7f7175a83a),
        (0xbcd76c975bc87e9a, 0x4063e346cfdd8f47),
        (0x3d1e5933d8ff6176, 0x407021b1efce0b2e),
        (0xbd13eaf71bd79b34, 0x407a452cb0660cad),
    ],
    [
        (0xbc7393ebd5b7c07b, 0x3ff85a1b2bad52aa),
        (0xbca51bbfb5d3bdb9, 0x400255d6e8140884),
        (0xbc5cda1a37617ff8, 0x400c1d2d837ab62b),
        (0x3cb2566129d3da0c, 0x4015e84619a864d5),
        (0xbcca47ddd82af630, 0x40214a0f065166e0),
        (0xbc7b14b4162b74fc, 0x402b96abd7720cec),
        (0x3ccea014400a9367, 0x403636cce405888e),
        (0xbce8d54eaaa229b0, 0x40420757a91aaf0b),
        (0x3cec34e9d49f7f65, 0x404d771bfbf02638),
        (0x3cff6f01bb178677, 0x405839509831a4d2),
        (0x3cf3f8d7d7d4d25b, 0x4064056dcf519634),
        (0x3d0c41d72ee7d4b0, 0x4070a058df9c4375),
        (0x3d133c6e4eb75704, 0x407bbb6130ece3a6),
        (0xbd2dd39c62047b97, 0x4087377207642f52),
    ],
    [
        (0xbc8a5d60efce1271, 0x3ffe2fa04d8d981b),
        (0xbc941743faf0e78c, 0x40076129f00e3eb1),
        (0xbc5db061d584f4fa, 0x40127206c01906ad),
        (0xbcaeffc258840b63, 0x401d93e379fcfc3f),
        (0x3cb077d055c6f1cd, 0x402804f98b12e48d),
        (0xbcbb9e340b4b30a8, 0x4033b80d67d5c5aa),
        (0xbce6a2aa5c924f5a, 0x4040566cfd768585),
        (0xbceef76532122d57, 0x404b49830f14b53f),
        (0x3cf5c2edae59ee67, 0x4056f1d088f547ce),
        (0xbd0e4dda2d3103c6, 0x406368e388e87865),
        (0xbd1835d991cdcea4, 0x407081d43f0ab1c2),
        (0x3cfabd94506a4978, 0x407c35f67a2c8619),
        (0xbd0ec36f0ecc6fde, 0x4088357be950f741),
        (0xbd35702497146a96, 0x4094dac25d6ef9d0),
    ],
    [
        (0x3ca47d64d730cd46, 0x4002d38a9108d98c),
        (0xbc88c98064865a27, 0x400e06a3cf415d08),
        (0x3caa455e1460af5d, 0x401865cc93edb055),
        (0x3cca87f9c55927e0, 0x402424d8c726c75b),
        (0xbcbd94523ebd2ab5, 0x4030d8c2965f739d),
        (0x3cccbc5853b2d0fb, 0x403c7c6d42c54d69),
        (0x3cc41990b392b1bc, 0x40484e3bc5b8d59f),
        (0xbcfb62111c93e5af, 0x4054e7413ebe0474),
        (0xbd094a60862df32b, 0x406219ea3b588d72),
        (0x3d0dad4c827c366c, 0x406f89fbaac8acd8),
        (0xbd11451c540bb657, 0x407b9f80a6a5f4d8),
        (0x3d2d268bdc1ae4cf, 0x40884ef418390ec7),
        (0xbd0e77c0c055b2bf, 0x40957b915584bae7),
        (0x3d49026a756f2e19, 0x40a30ef0d420c6e9),
    ],
    [
        (0xbca3f4329dacc2b0, 0x4007a3c9a6d2bcaf),
        (0xbc9f7bc1b9a378be, 0x40136d892c5f2fcf),
        (0x3cbf3330217bf2ef, 0x402045be7ee59520),
        (0xbc8b2f75e9da20d1, 0x402bb23d6c51d911),
        (0xbcb3e5fbab520069, 0x4037e016f5cad891),
        (0xbcebf73cd1da2ee3, 0x4044ce5af45e94b2),
        (0xbce034257a85b8ea, 0x40524c79c1316c34),
        (0x3cf1651c16cc7794, 0x406038aa55169695),
        (0x3ce1fe791883301b, 0x406cf5384218dc39),
        (0x3d17bd6d6945f020, 0x407a00f053b49b27),
        (0x3d2b28dff8f640ea, 0x408779c15b9b9314),
        (0x3d2d268c2c463dae, 0x40954b4d97ed3e45),
        (0xbd4b9b07f436549d, 0x40a365d2e7396d8b),
        (0xbd55cd2bf5fbc1d0, 0x40b1bcf559a97848),
    ],
];
