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

/// Reciprocals of the 256 mantissa bins, truncated to 10 bits.
pub(crate) static LOG_R: [u64; 256] = [
    0x3ff0000000000000, 0x3fefd00000000000, 0x3fefb00000000000, 0x3fef900000000000,
    0x3fef700000000000, 0x3fef500000000000, 0x3fef300000000000, 0x3fef100000000000,
    0x3feef80000000000, 0x3feed80000000000, 0x3feeb80000000000, 0x3fee980000000000,
    0x3fee800000000000, 0x3fee600000000000, 0x3fee480000000000, 0x3fee280000000000,
    0x3fee080000000000, 0x3fedf00000000000, 0x3fedd00000000000, 0x3fedb80000000000,
    0x3feda00000000000, 0x3fed800000000000, 0x3fed680000000000, 0x3fed480000000000,
    0x3fed300000000000, 0x3fed180000000000, 0x3fecf80000000000, 0x3fece00000000000,
    0x3fecc80000000000, 0x3fecb00000000000, 0x3fec900000000000, 0x3fec780000000000,
    0x3fec600000000000, 0x3fec480000000000, 0x3fec300000000000, 0x3fec180000000000,
    0x3fec000000000000, 0x3febe80000000000, 0x3febd00000000000, 0x3febb80000000000,
    0x3feba00000000000, 0x3feb880000000000, 0x3feb700000000000, 0x3feb580000000000,
    0x3feb400000000000, 0x3feb280000000000, 0x3feb100000000000, 0x3feaf80000000000,
    0x3feae00000000000, 0x3fead00000000000, 0x3feab80000000000, 0x3feaa00000000000,
    0x3fea880000000000, 0x3fea700000000000, 0x3fea600000000000, 0x3fea480000000000,
    0x3fea300000000000, 0x3fea200000000000, 0x3fea080000000000, 0x3fe9f00000000000,
    0x3fe9e00000000000, 0x3fe9c80000000000, 0x3fe9b80000000000, 0x3fe9a00000000000,
    0x3fe9880000000000, 0x3fe9780000000000, 0x3fe9600000000000, 0x3fe9500000000000,
    0x3fe9380000000000, 0x3fe9280000000000, 0x3fe9100000000000, 0x3fe9000000000000,
    0x3fe8f00000000000, 0x3fe8d80000000000, 0x3fe8c80000000000, 0x3fe8b00000000000,
    0x3fe8a00000000000, 0x3fe8900000000000, 0x3fe8780000000000, 0x3fe8680000000000,
    0x3fe8580000000000, 0x3fe8400000000000, 0x3fe8300000000000, 0x3fe8200000000000,
    0x3fe8080000000000, 0x3fe7f80000000000, 0x3fe7e80000000000, 0x3fe7d80000000000,
    0x3fe7c00000000000, 0x3fe7b00000000000, 0x3fe7a00000000000, 0x3fe7900000000000,
    0x3fe7800000000000, 0x3fe7700000000000, 0x3fe7580000000000, 0x3fe7480000000000,
    0x3fe7380000000000, 0x3fe7280000000000, 0x3fe7180000000000, 0x3fe7080000000000,
    0x3fe6f80000000000, 0x3fe6e80000000000, 0x3fe6d80000000000, 0x3fe6c80000000000,
    0x3fe6b80000000000, 0x3fe6a80000000000, 0x3ff6980000000000, 0x3ff6880000000000,
    0x3ff6780000000000, 0x3ff6680000000000, 0x3ff6580000000000, 0x3ff6480000000000,
    0x3ff6380000000000, 0x3ff6280000000000, 0x3ff6180000000000, 0x3ff6080000000000,
    0x3ff5f80000000000, 0x3ff5e80000000000, 0x3ff5d80000000000, 0x3ff5d00000000000,
    0x3ff5c00000000000, 0x3ff5b00000000000, 0x3ff5a00000000000, 0x3ff5900000000000,
    0x3ff5800000000000, 0x3ff5780000000000, 0x3ff5680000000000, 0x3ff5580000000000,
    0x3ff5480000000000, 0x3ff5400000000000, 0x3ff5300000000000, 0x3ff5200000000000,
    0x3ff5100000000000, 0x3ff5080000000000, 0x3ff4f80000000000, 0x3ff4e80000000000,
    0x3ff4d80000000000, 0x3ff4d00000000000, 0x3ff4c00000000000, 0x3ff4b00000000000,
    0x3ff4a80000000000, 0x3ff4980000000000, 0x3ff4880000000000, 0x3ff4800000000000,
    0x3ff4700000000000, 0x3ff4600000000000, 0x3ff4580000000000, 0x3ff4480000000000,
    0x3ff4400000000000, 0x3ff4300000000000, 0x3ff4200000000000, 0x3ff4180000000000,
    0x3ff4080000000000, 0x3ff4000000000000, 0x3ff3f00000000000, 0x3ff3e80000000000,
    0x3ff3d80000000000, 0x3ff3c80000000000, 0x3ff3c00000000000, 0x3ff3b00000000000,
    0x3ff3a80000000000, 0x3ff3980000000000, 0x3ff3900000000000, 0x3ff3800000000000,
    0x3ff3780000000000, 0x3ff3680000000000, 0x3ff3600000000000, 0x3ff3500000000000,
    0x3ff3480000000000, 0x3ff3400000000000, 0x3ff3300000000000, 0x3ff3280000000000,
    0x3ff3180000000000, 0x3ff3100000000000, 0x3ff3000000000000, 0x3ff2f80000000000,
    0x3ff2f00000000000, 0x3ff2e00000000000, 0x3ff2d80000000000, 0x3ff2c80000000000,
    0x3ff2c00000000000, 0x3ff2b80000000000, 0x3ff2a80000000000, 0x3ff2a00000000000,
    0x3ff2980000000000, 0x3ff2880000000000, 0x3ff2800000000000, 0x3ff2780000000000,
    0x3ff2680000000000, 0x3ff2600000000000, 0x3ff2580000000000, 0x3ff2480000000000,
    0x3ff2400000000000, 0x3ff2380000000000, 0x3ff2280000000000, 0x3ff2200000000000,
    0x3ff2180000000000, 0x3ff2100000000000, 0x3ff2000000000000, 0x3ff1f80000000000,
    0x3ff1f00000000000, 0x3ff1e00000000000, 0x3ff1d80000000000, 0x3ff1d00000000000,
    0x3ff1c80000000000, 0x3ff1c00000000000, 0x3ff1b00000000000, 0x3ff1a80000000000,
    0x3ff1a00000000000, 0x3ff1980000000000, 0x3ff1880000000000, 0x3ff1800000000000,
    0x3ff1780000000000, 0x3ff1700000000000, 0x3ff1680000000000, 0x3ff1580000000000,
    0x3ff1500000000000, 0x3ff1480000000000, 0x3ff1400000000000, 0x3ff1380000000000,
    0x3ff1300000000000, 0x3ff1200000000000, 0x3ff1180000000000, 0x3ff1100000000000,
    0x3ff1080000000000, 0x3ff1000000000000, 0x3ff0f80000000000, 0x3ff0f00000000000,
    0x3ff0e80000000000, 0x3ff0d80000000000, 0x3ff0d00000000000, 0x3ff0c80000000000,
    0x3ff0c00000000000, 0x3ff0b80000000000, 0x3ff0b00000000000, 0x3ff0a80000000000,
    0x3ff0a00000000000, 0x3ff0980000000000, 0x3ff0900000000000, 0x3ff0880000000000,
    0x3ff0780000000000, 0x3ff0700000000000, 0x3ff0680000000000, 0x3ff0600000000000,
    0x3ff0580000000000, 0x3ff0500000000000, 0x3ff0480000000000, 0x3ff0400000000000,
    0x3ff0380000000000, 0x3ff0300000000000, 0x3ff0280000000000, 0x3ff0200000000000,
    0x3ff0180000000000, 0x3ff0100000000000, 0x3ff0080000000000, 0x3ff0000000000000,
];

/// `-log(r)` for every reciprocal in [LOG_R], as (lo, mid, hi).
pub(crate) static LOG_NEG_LOG_R: [(u64, u64, u64); 256] = [
    (0x0000000000000000, 0x0000000000000000, 0x0000000000000000),
    (0x387b59b52a5681bd, 0x3bec14b9f9377a1d, 0x3f78121214586b54),
    (0x38c6b69dd1ac0a31, 0xbc2c5517f64bc223, 0x3f841929f96832f0),
    (0xb8bf713b529d3d76, 0x3c2806208c04c220, 0x3f8c317384c75f06),
    (0xb8b3e8da8eba2824, 0xbc2cd7b66e01c26d, 0x3f9228fb1fea2e28),
    (0xb86484372b0fc178, 0xbbf8ed4d357c9c97, 0x3f963d6178690bd6),
    (0xb8aee63a49c74224, 0x3c1ec1a5f86d41f9, 0x3f9a55f548c5c43f),
    (0x38ce166b9e0c701b, 0x3c375b44595cab18, 0x3f9e72bf2813ce51),
    (0xb8e9ab45676fc08c, 0xbc4d158b17912f05, 0x3fa0c58fa19dfaaa),
    (0xb8cfc7c5de2198e7, 0xbc4ca2ced33683f7, 0x3fa2d7ae5c3c5bae),
    (0xb8eef983107b651c, 0xbc443dcef9dcdaea, 0x3fa4ebf43349e26f),
    (0xb8cea90de04898c7, 0x3c307701518c6660, 0x3fa70265a550e777),
    (0xb8cd5f973f27591e, 0x3c3a8be97660a23d, 0x3fa894aa149fb343),
    (0xb8cd0957659a8681, 0x3c2a353bb42e0add, 0x3faaaef2d0fb10fc),
    (0xb8df7b39345f4592, 0x3c3f49850d154aca, 0x3fac441e06f72a9e),
    (0x38eff4b97467fb73, 0x3c41c5cc4cbb986d, 0x3fae624c4a0b5e1b),
    (0x38e3bc1c184cef0a, 0x3c5c05cf1d753622, 0x3fb0415d89e74444),
    (0x38db4cbd380a58f0, 0xbc5a4a128d192686, 0x3fb10e45b3cae831),
    (0xb8f531cc3e70565e, 0xbc5cc0fbce104eaa, 0x3fb2207b5c78549e),
    (0xb8a5ea93e568d5db, 0x3c0edd77c85fad40, 0x3fb2eee507b40301),
    (0x38eb282b433139ab, 0x3c47a976d3b5b45f, 0x3fb3bdf5a7d1ee64),
    (0xb8e3165ac490d812, 0x3c5769f42c7842cc, 0x3fb4d3115d207eac),
    (0xb8ec924fe569b8b0, 0x3c5d279abe85fab6, 0x3fb5a3abb01ade25),
    (0x3896c6a4674af1e3, 0xbc3867eedb2a4faf, 0x3fb6bad83c1883b6),
    (0xb8eb73942ba54569, 0x3c5abca5b4fdb880, 0x3fb78d02263d82d3),
    (0xb8db9b7a051f4dfb, 0xbc3819970c1c76cd, 0x3fb85fd927506a48),
    (0xb8ea56633d3477f2, 0x3c49f466fb618c1d, 0x3fb97a07024cbe74),
    (0xb8f9be73856e63dd, 0xbc55b5ca203e4259, 0x3fba4e7640b1bc38),
    (0xb8e06dbc8795a5a4, 0x3c53622bd91f0d86, 0x3fbb23965a52ff00),
    (0x38ec5646e7873ff4, 0xbc4cdc9f6f5f38c7, 0x3fbbf968769fca11),
    (0xb8ca4a0195f6076f, 0x3c49daf7df76ad2a, 0x3fbd179788219364),
    (0x38fdd56bd3ebdfad, 0xbc54104ba69d1fd8, 0x3fbdef0d8d466db9),
    (0xb8b1980fad2b8c8f, 0xbc4a2bf991780d3f, 0x3fbec739830a1120),
    (0xb8f07af21881e970, 0xbc5a8fd2453980aa, 0x3fbfa01c9db57ce2),
    (0x38d491637376842d, 0x3c639e2d3f8b7d10, 0x3fc03cdc0a51ec0d),
    (0x38f5787a5e463af1, 0x3c6cc51f9bdae72d, 0x3fc0aa06912675d5),
    (0x38f03c776a3fb0f1, 0xbc50e63a5f01c691, 0x3fc1178e8227e47c),
    (0xb9019a6ad4dd8f1d, 0xbc6777484c96e5d5, 0x3fc185747dbecf34),
    (0xb8dc641c1655b965, 0x3c462c9ef939ac5d, 0x3fc1f3b925f25d41),
    (0xb8f6a6724951d204, 0xbc62c5e13c7b03d6, 0x3fc2625d1e6ddf57),
    (0xb8fdedef6e5214fa, 0xbc5499a3f25af95f, 0x3fc2d1610c86813a),
    (0xb8e0d78e35499a19, 0x3c418413163ccbd0, 0x3fc340c59741142e),
    (0xb8c44d5c95f5d241, 0x3c370d6cdf05266c, 0x3fc3b08b6757f2a9),
    (0xb8fd34a9e9a8126c, 0xbc641642d0442295, 0x3fc420b32740fdd4),
    (0x38f046ddd0c4995f, 0xbc50d5604930f135, 0x3fc4913d8333b561),
    (0x38ade0c8dac98125, 0x3c17fcda896de0e9, 0x3fc5022b292f6a45),
    (0xb8fcb60e1eb82c6c, 0x3c64f4d710fec38e, 0x3fc5737cc9018cdd),
    (0x38a780a0bcf86faf, 0xbc27e76521d4f8b4, 0x3fc5e533144c1719),
    (0xb8d0587f8805bff2, 0xbc3d34f0f4621bed, 0x3fc6574ebe8c133a),
    (0x38ef4165ace952df, 0x3c696332bd4b341f, 0x3fc6a399dabbd383),
    (0x390135f7571148e2, 0x3c6b157cec383873, 0x3fc716600c914054),
    (0x38fa90e246a61446, 0x3c5ef8f6ebcfb201, 0x3fc7898d85444c73),
    (0xb8f57ece2bad0f50, 0xbc6f5fa2bdbe8c07, 0x3fc7fd22ff599d4f),
    (0xb8ea55c7d1bf59b5, 0x3c6d685f35eea2a0, 0x3fc871213750e994),
    (0x38e5f9812ac08ffd, 0x3c555aa8b6997a40, 0x3fc8beafeb38fe8c),
    (0x390089735832ff2f, 0xbc6478a85704ccb7, 0x3fc9335e5d594989),
    (0xb90b9f17794734cf, 0x3c6f47dfd871f87f, 0x3fc9a8778debaa38),
    (0x38dc16be326ac41a, 0x3c435a19605e67ef, 0x3fc9f6c407089664),
    (0x38e1dec340151d54, 0x3c5203f213ce9578, 0x3fca6c90d44b704e),
    (0xb8f307466a8570bb, 0x3c6ab5ca9eaa088a, 0x3fcae2ca6f672bd4),
    (0xb8f0459563c86e85, 0xbc66353ab386a94d, 0x3fcb31d8575bce3d),
    (0x38fcdd5032c8cf17, 0x3c6cfe88865b42bd, 0x3fcba8c90ae4ad19),
    (0xb8a359aa3d27301d, 0xbc2c9810a959106a, 0x3fcbf851c067555f),
    (0x3900f039c9a8a2e5, 0xbc68e58b2c57a4a5, 0x3fcc6ffbc6f00f71),
    (0xb8f72c90c169fe1b, 0xbc55744132a297b0, 0x3fcce816157f1988),
    (0xb8ddf70adf0b7451, 0xbc542ce24caf02f9, 0x3fcd38666871f465),
    (0xb8ff3a153d8d4fe0, 0x3c5aa11d49f96cb9, 0x3fcdb13db0d48940),
    (0xb8de287e4407f374, 0x3c5fea48dd7b81d1, 0x3fce020cc6235ab5),
    (0xb8e809f8016eef98, 0x3c411dc86c9b7564, 0x3fce7ba35eb77e2a),
    (0xb8f2fc9edafba0d4, 0xbc58e8f9d5901960, 0x3fceccf2c8fe920a),
    (0xb8f96415b209f7c5, 0xbc527c77ded76aad, 0x3fcf474b134df229),
    (0xb90c93e26ec48e0e, 0x3c6f665066f980a2, 0x3fcf991c6cb3b379),
    (0xb878c9ae634d3c77, 0x3c28de00938b4c40, 0x3fcfeb2233ea07cd),
    (0xb91046b038afc09b, 0x3c7ff8a966395c73, 0x3fd03346e0106062),
    (0x38d7beab78f74c66, 0x3c5e38ef996b0c96, 0x3fd05c8be0d9635a),
    (0xb90f2a6f815b079c, 0x3c643c2e68684d53, 0x3fd09aa572e6c6d4),
    (0x38f078ecd47fd065, 0x3c5162c79d5d11ee, 0x3fd0c42d676162e3),
    (0x390349ab8071c6f5, 0xbc692b49ef282b09, 0x3fd0edd060b78081),
    (0x38f63e24006b7260, 0x3c64a4508fbcba26, 0x3fd12c77cd00713b),
    (0x38f1ebd2ebe3c379, 0x3c54a4092a8bb5e0, 0x3fd1565eed455fc3),
    (0x3917b280acfa2deb, 0x3c7003792c71a980, 0x3fd180618ef18adf),
    (0xb904298ef6ad5800, 0xbc612aeb84249223, 0x3fd1bf99635a6b95),
    (0x391fb7583fdc5cd1, 0x3c7512c3749a1e4e, 0x3fd1e9e1678899f4),
    (0xb8fbbc46cf6d5b05, 0x3c6f7ae91aeba60a, 0x3fd214456d0eb8d4),
    (0xb91717c84b4bca97, 0x3c77ac0ef77f252a, 0x3fd25410494e56c7),
    (0x3908083831ed291a, 0xbc68800b4bda6c97, 0x3fd27ebaf58d8c9d),
    (0xb91f6f744c22c305, 0x3c738d546bd18905, 0x3fd2a982269a3dbf),
    (0xb917df2ab13eed6c, 0x3c77911955f3520f, 0x3fd2d46602adccee),
    (0xb91f0f8d6f3c6a8e, 0xbc73d69909e5c3dc, 0x3fd314f1e1d35ce4),
    (0xb8f954216e4fd4b3, 0xbc5cd55b8a4746c0, 0x3fd3401e12aecba1),
    (0x38f5f12812782422, 0xbc5324f0e883858e, 0x3fd36b6776be1117),
    (0x38e44a223cab7ad9, 0xbc5ce2b31b31e8b0, 0x3fd396ce359bbf54),
    (0xb905ea8429f9f46d, 0xbc72ad27e50a8ec6, 0x3fd3c25277333184),
    (0x390cccb5749e39eb, 0x3c783d680d3c1084, 0x3fd3edf463c1683e),
    (0x390ff61d3b76b943, 0xbc7bbf082ccabbae, 0x3fd42f9f3ff62642),
    (0x38e072f0cccfc162, 0x3c7dbe305eaf5a20, 0x3fd45b8c0a17df13),
    (0x391e77fd972a3578, 0x3c7b8465cf25f4c6, 0x3fd487970e958770),
    (0xb8f6b9a352803ff0, 0x3c72e5fbeb518508, 0x3fd4b3c077267e9a),
    (0xb90cb545def6ab7b, 0x3c76d5e1bb877c2e, 0x3fd4e0086dd8baca),
    (0xb918bf9337438d31, 0x3c794817d83d3ed0, 0x3fd50c6f1d11b97c),
    (0x38f33a1e9b44f1d3, 0xbc7fe8dd55c19315, 0x3fd538f4af8f72fe),
    (0xb910e601fa610418, 0x3c77f4aeb71dce60, 0x3fd565995069514c),
    (0x38a535ebfd0c81ac, 0x3c24b0b52198dbd9, 0x3fd5925d2b112a59),
    (0xb8d25a7abe3c6675, 0xbc31f5b44c0df7e7, 0x3fd5bf406b543db2),
    (0x3909f48b8f79af8d, 0xbc6cbdbac5d0228e, 0x3fd5ec433d5c35ae),
    (0x38f761ae7aa9e314, 0xbc55ac078911cb74, 0x3fd61965cdb02c1f),
    (0xb8ef6e5e744ff16a, 0xbc7f2a42f012c6e2, 0xbfd615ddb4bec13c),
    (0xb8e607a55d45f2dd, 0x3c4738446382fc51, 0xbfd5e87b20c2954a),
    (0x390865f9705bc03d, 0xbc717078c05bf27d, 0xbfd5baf846aa1b19),
    (0xb90fdee14907bac1, 0xbc6f30a795214b66, 0xbfd58d54f86e02f2),
    (0xb912eccd77438d41, 0x3c791de37d2989ee, 0xbfd55f9107a43ee2),
    (0x38da5164a0097b60, 0xbc4dbec98a8071bd, 0xbfd531ac457ee77e),
    (0xb8facc5230775e5f, 0x3c591e2df36b99de, 0xbfd503a682cb1cb3),
    (0x38e372396d3bbcd8, 0xbc6267fd06868642, 0xbfd4d57f8fefe27f),
    (0xb9066e19f1dfd706, 0xbc7cb140cabb6bdb, 0xbfd4a7373cecf997),
    (0x38f78133639d74b1, 0xbc537e191a12fb48, 0xbfd478cd5959b3d9),
    (0x390dc7c976d42cd4, 0x3c7d70c8309edcfc, 0xbfd44a41b463c47c),
    (0x390b2e6039994f89, 0xbc76fec1bc0376f6, 0xbfd41b941cce0bee),
    (0xb8ff66cf640f0efb, 0x3c54313e09807aff, 0xbfd3ecc460ef5f50),
    (0xb90229e62e452918, 0x3c7e3265c6a1c98d, 0xbfd3d54fa5c1f710),
    (0xb90beb7a3cee7e03, 0x3c6c68651945f97c, 0xbfd3a64c556945ea),
    (0xb8e790d82b75e920, 0x3c4b5629d8117de7, 0xbfd3772662bfd85b),
    (0xb90ee510a580b3b3, 0x3c64dd4c580919f8, 0xbfd347dd9a987d55),
    (0x38d19a07a2d2cc1e, 0x3c351acc4c09b379, 0xbfd31871c9544185),
    (0x390864244294826f, 0x3c78f4cdb95ebdf9, 0xbfd2e8e2bae11d31),
    (0xb8ed8c8709a24468, 0xbc587dc220d4d94c, 0xbfd2d10dec508583),
    (0xb8f29036b8ef01a8, 0xbc502b831548f4a6, 0xbfd2a1499f762bc9),
    (0xb909df08c187e2e9, 0xbc6e3ec2ac9676b8, 0xbfd27161913f853d),
    (0x38585ccc75300ae9, 0x3be9bae06a5c872d, 0xbfd241558bfd1404),
    (0x390a168b2a9642c4, 0x3c776f5eb09628af, 0xbfd22941fbcf7966),
    (0xb918cf23e43622b1, 0x3c7c9fdf9a0c4b07, 0xbfd1f8ff9e48a2f3),
    (0x38ce623be88a509b, 0x3c30e5c62aff1c44, 0xbfd1c898c16999fb),
    (0x3918eb33aa901486, 0xbc79d3d1b0e4d147, 0xbfd1980d2dd4236f),
    (0xb8dd28873962401b, 0xbc77458b5d97ba9d, 0xbfd17fb98e15095d),
    (0xb8d2c5a852dcdc92, 0xbc566880da1b13e4, 0xbfd14ef67f88685a),
    (0x38a252ef5d93807c, 0xbc0dc0cc6917022b, 0xbfd11e0e2dad9cb7),
    (0x391c8bb15e888891, 0xbc7c56bd2abfe82a, 0xbfd0ed005f657da4),
    (0xb907333da8be1a7d, 0xbc603ec81c3cbd92, 0xbfd0d46b579ab74b),
    (0xb8ec51bc06b5f7c1, 0xbc77dcfde8061c03, 0xbfd0a324e27390e3),
    (0xb8e00ca1b7fa08da, 0xbc5d1707f97bde80, 0xbfd071b85fcd590d),
    (0x38f2895e70605de1, 0x3c59af348dab5c3c, 0xbfd058f3c703ebc6),
    (0xb8fd6f22182512ee, 0xbc6e89cf835c2780, 0xbfd0274dc16c232f),
    (0xb9098d30301dce69, 0xbc66e32d5e8c707f, 0xbfcfeb0233e607cc),
    (0x39035f6dfd3ddd52, 0x3c6caaae64f21acb, 0xbfcfb9186d5e3e2b),
    (0xb8798a014b61d510, 0xbc2c5f6dfd018c37, 0xbfcf550a564b7b37),
    (0x390eb052d7b3cbe3, 0xbc648637950dc20d, 0xbfcef0adcbdc5936),
    (0x38e9962d3c85e2fd, 0x3c44cc3f7293285c, 0xbfcebe61f4dd7b0b),
    (0xb8fa90a48f1ab80a, 0x3c5a5e78f4c50659, 0xbfce598ed5a87e2f),
    (0xb8c55db94ebc4018, 0x3c461578001e0162, 0xbfce27076e2af2e6),
    (0xb8edd2b51478112e, 0xbc6834c51998b6fc, 0xbfcdc1bca0abec7d),
    (0xb8ec3c6ce7a257f4, 0xbc66e443597e4d40, 0xbfcd5c216b4fbb91),
    (0xb8ee947282ea601d, 0x3c5c04a2aa97ac8e, 0xbfcd293581b6b3e7),
    (0x38b01818b1e05b53, 0xbc6039a653793a85, 0xbfccc320c0176502),
    (0xb90a24ae3b2f53a1, 0x3c64f689f8434012, 0xbfcc8ff7c79a9a22),
    (0xb89f00f527d33467, 0x3c673dee38a3fb6b, 0xbfcc2968558c18c1),
    (0x390554cc45b6f6dc, 0x3c656b83c874aaf4, 0xbfcbf601bb0e44e2),
    (0x38e7aa69f3a1b9af, 0x3c6999bd0ee3fe88, 0xbfcb8ef670420c3b),
    (0x38c4e2c61a826650, 0x3c61520da0151cf7, 0xbfcb2797ee46320c),
    (0x38da262591d1968b, 0x3c5398cff3641985, 0xbfcaf3c94e80bff3),
    (0xb8d58b02842ae948, 0x3c5e8c37918c39eb, 0xbfca8becfc882f19),
    (0xb8d268b3c41510bd, 0x3c4b9af132a24e39, 0xbfca57df28244dcd),
    (0x38fea547ba8ab5d2, 0x3c56f67f39bff3a5, 0xbfc9ef83d2769a34),
    (0xb8f28792ae1aabc8, 0xbc6575e31f003e0c, 0xbfc9bb362e7dfb83),
    (0x39089d9afa096184, 0xbc6d904c1d4e2e26, 0xbfc9525a9cf456b4),
    (0xb8f1fe27342b488f, 0xbc5aaf77bfd17182, 0xbfc91dcc8c340bde),
    (0xb8f8a5fd35d869b9, 0xbc5f2102dd7c92ec, 0xbfc8b46f8223625b),
    (0x38f0a5aa8fb49481, 0x3c6bf7fdbfa08d9a, 0xbfc87fa06520c911),
    (0xb8f435bddbbe732c, 0x3c54be48073a0564, 0xbfc815c0a14357eb),
    (0xb8eba1011b3d6ac4, 0x3c583e270efcc373, 0xbfc7e0afd630c274),
    (0xb8a91ff852536204, 0xbc4be36b2d6a0608, 0xbfc7ab890210d909),
    (0x38f0be957f10f5fb, 0x3c5b264062a84cdb, 0xbfc740f8f54037a5),
    (0x38ed8c92241dcfe8, 0xbc593daa56fbafd6, 0xbfc70b8f97a1aa75),
    (0xb8ba45e9d055d031, 0x3c1eedcbac2a7f18, 0xbfc6a079d0f7aad2),
    (0x38f80ab0a1bc6d9b, 0x3c50900e4e1ea8b2, 0xbfc66acd4272ad51),
    (0x38e1406554719540, 0x3c5bc60efafc6f6e, 0xbfc5ff3070a793d4),
    (0xb8d5287d57610eb2, 0xbc5adccb73379cc5, 0xbfc5c940075972b9),
    (0xb8f60e1f10db27cb, 0x3c565d22aa8ad7cf, 0xbfc59338d9982086),
    (0xb90a6dbcc63b5444, 0x3c6746ff8a470d3a, 0xbfc526e5e3a1b438),
    (0xb8c5cd2aa2def960, 0xbc2a0a02a1b24794, 0xbfc4f099f4a230b2),
    (0xb8fd26be2922299e, 0xbc629391fb1b4b22, 0xbfc483bccce6e3dd),
    (0x390f3be9a8337458, 0xbc69f4f6543e1f88, 0xbfc44d2b6ccb7d1e),
    (0x38c5cb1d7c665557, 0x3c41c207e127261b, 0xbfc41682bf727bc0),
    (0x38d93ceabb317c7b, 0x3c3220a8abf098f4, 0xbfc3a8eb2d31a376),
    (0x38ea2fc19b24ab16, 0xbc5de6cb62af18a0, 0xbfc371fc201e8f74),
    (0x38d1a636fdb0d9e0, 0xbc69945fce5491ea, 0xbfc33af575770e4f),
    (0x38ebb90f61b60780, 0x3c6e3235fe23f016, 0xbfc2cca0f5f5f251),
    (0x390977b021b7c784, 0xbc6301771c407dbf, 0xbfc29552f81ff523),
    (0x38e0310a04dfaa62, 0x3c5eac3a26edd19c, 0xbfc25ded0abc6ad2),
    (0xb909386327d9fccf, 0x3c64e47b44db8540, 0xbfc1eed90e2dc2c3),
    (0x38f81887026f66ad, 0xbc5483023472cd74, 0xbfc1b72ad52f67a0),
    (0xb8a6ed580217d4b7, 0x3c04bdb0dc8fdffa, 0xbfc17f6458fca611),
    (0xb8fc039a4527ad05, 0xbc58f798d39f1b7d, 0xbfc10f8e422539b1),
    (0x39071dbd9a581398, 0xbc69a5dc5e9030ac, 0xbfc0d77e7cd08e59),
    (0xb8d3859f595b7973, 0xbc5f51d505cb0b76, 0xbfc09f561ee719c3),
    (0x38c09ccb3725a880, 0x3c4f4b9c01cb92c6, 0xbfc02ebb42bf3d4b),
    (0x38fc4016e1d457ee, 0x3c55746b9981b36c, 0xbfbfec9131dbeabb),
    (0xb8d072ba85f558e6, 0x3c487e897ed01783, 0xbfbf7b79fec37ddf),
    (0x38f0ece597165991, 0xbc585f325c5bbacd, 0xbfbf0a30c01162a6),
    (0xb8b55db94ebc4018, 0x3c361578001e0162, 0xbfbe27076e2af2e6),
    (0xb8f78272bb99f905, 0xbc5e15ab8607d2ac, 0xbfbdb5270187d927),
    (0xb8e20959368928d5, 0xbc5790dd951d90fa, 0xbfbd4313d66cb35d),
    (0xb8dda7659abe370e, 0xbc35d617ef8161b1, 0xbfbc5e548f5bc743),
    (0x38d4800569b59317, 0x3c5e2db7c7d5a130, 0xbfbbeba818146765),
    (0x38cb0b1387f2d48f, 0xbc20878cf0327e21, 0xbfbb78c82bb0eda1),
    (0xb8f60c7abf862760, 0xbc5160c7c252f298, 0xbfbb05b49bee43fe),
    (0xb8e8f353ecfc45da, 0xbc5942f48aa70ea9, 0xbfba926d3a4ad563),
    (0x38cbb52cb975cbeb, 0x3c42099e1c184e8e, 0xbfb9ab42462033ad),
    (0xb8ee4b086a4e6d9f, 0x3c4e463f9e4dd920, 0xbfb9375e55595ede),
    (0x38ce547ecfe0df94, 0x3c24a697ab3424a9, 0xbfb8c345d6319b21),
    (0x38e02ba1c1201640, 0xbc496dcb441b9227, 0xbfb84ef898e8282a),
    (0xb8b84782422e8054, 0xbc50ff28ef6a592f, 0xbfb765bf23a6be13),
    (0x38fbf31af3e109af, 0x3c5906d99184b992, 0xbfb6f0d28ae56b4c),
    (0xb8f59c19b4b43ce5, 0x3c5b692c214ddbec, 0xbfb67bb0726ec0fc),
    (0xb8fc66d48ed8883f, 0x3c5388458ec21b6a, 0xbfb60658a93750c4),
    (0x38fab81e34e9272b, 0xbc53d5c8aaea76d2, 0xbfb590cafdf01c28),
    (0xb8c27b7fae570831, 0xbc2ecf768c1dd57b, 0xbfb4a50d3aa1b040),
    (0xb8d7465d8f6866cf, 0xbc4ddd4f935996c9, 0xbfb42edcbea646f0),
    (0xb8b39ff314be96cc, 0x3c2594aca31297a3, 0xbfb3b87598b1b6ee),
    (0x38e15fbcbe26b491, 0x3c5b599f227becbb, 0xbfb341d7961bd1d1),
    (0xb8db5967f650d8c3, 0x3c3d359a8fde8ade, 0xbfb2cb0283f5de1f),
    (0x38bd2c3f5a497e44, 0x3c1c125963fc4cfd, 0xbfb253f62f0a1417),
    (0x38bb925bd6fa5998, 0x3c379da3e8c22cda, 0xbfb16536eea37ae1),
    (0xb8bfa6a07660a41c, 0xbc27256ea8988a68, 0xbfb0ed839b5526fe),
    (0x38b77ad5e5273f98, 0xbc480da5333c45b8, 0xbfb075983598e471),
    (0xb8d009fa96683787, 0xbc3ba13162a9c446, 0xbfaffae9119b9303),
    (0x38e0ece597165991, 0xbc485f325c5bbacd, 0xbfaf0a30c01162a6),
    (0xb8d247f5d0ccf58d, 0x3c419918a7a17dc1, 0xbfae19070c276016),
    (0xb8acecc7db99d86a, 0xbc21e3c53257fd47, 0xbfad276b8adb0b52),
    (0x38b70f7524fca346, 0x3c39b2a03e3be3a7, 0xbfac355dd0921f2d),
    (0xb8a1910b0a5d43f2, 0x3c128100a49366b4, 0xbfaa4fe9ffa3d235),
    (0x38e9e0ef8448a202, 0xbc4f5a0e80520bf2, 0xbfa95c830ec8e3eb),
    (0xb8b04ff461efa612, 0x3c2d09a5634943db, 0xbfa868a83083f6cf),
    (0xb8b63c9bf701b2a9, 0xbc418d3ca87b9296, 0xbfa77458f632dcfc),
    (0xb863c5893f2bd805, 0xbc3f3e7e4ed6b2d6, 0xbfa67f94f094bd98),
    (0x38d33fb67ae4f6ce, 0x3c4ce55c2b4e2b72, 0xbfa58a5bafc8e4d5),
    (0x38969e70279e3887, 0xbc4e295bf491ccc5, 0xbfa494acc34d911c),
    (0xb8dc8d57ae1e11bd, 0x3c45bfa937f551bb, 0xbfa39e87b9febd60),
    (0xb8c70847b9a18053, 0xbc28856e9c01e6dd, 0xbfa2a7ec2214e873),
    (0x38df6acb8073198b, 0x3c3e9ae889bac481, 0xbfa1b0d98923d980),
    (0xb8ea94cf59db0edb, 0xbc4da43f761f4dc4, 0xbfa0b94f7c196176),
    (0x38b6579d19e688b1, 0x3c1d34e608cbdaab, 0xbf9d91a66c543cc4),
    (0xb899ffdb5331f453, 0x3bf0ae69229dc868, 0xbf9b9fc027af9198),
    (0xb8b4bb54559665ed, 0xbc33409c1df8167f, 0xbf99ace7551cc514),
    (0xb89dcd4f102a521d, 0x3c35b602ace3a510, 0xbf97b91b07d5b11b),
    (0xb8c60bcaaeaaf3a3, 0x3c3b10b6c3ec21b4, 0xbf95c45a51b8d389),
    (0xb8a98d0797189a4d, 0x3c10cb5a902b3a1c, 0xbf93cea44346a575),
    (0xb8a2ad0659fb166d, 0x3c2d41fe63d2dbf9, 0xbf91d7f7eb9eebe7),
    (0x38b52414fc416fc2, 0x3c183092c59642a1, 0xbf8fc0a8b0fc03e4),
    (0x38b406af222cfccb, 0x3c1f6842688f499a, 0xbf8bcf712c74384c),
    (0xb8aa850a4a1800ea, 0x3c116d7687d3df21, 0xbf87dc475f810a77),
    (0x3882c03f9ce59312, 0x3beff29a11443a06, 0xbf83e7295d25a7d9),
    (0xb86a567b6587df34, 0x3bce44b7e3711ebf, 0xbf7fe02a6b106789),
    (0xb87eb2800d1f38d1, 0x3c161e96e2fc5d90, 0xbf77ee11ebd82e94),
    (0x38912dcccb588a4a, 0xbc02821ad5a6d353, 0xbf6ff00aa2b10bc0),
    (0x389538d49c4f745e, 0xbbfe29e3a153e3b2, 0xbf5ff802a9ab10e6),
    (0x0000000000000000, 0x0000000000000000, 0x0000000000000000),
];
