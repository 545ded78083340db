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

/// `sin(jπ/256)` for `j` in `0..=64`, triple-double.
pub(crate) static SIN_TABLE: [(u64, u64, u64); 65] = [
    (0x0000000000000000, 0x0000000000000000, 0x0000000000000000),
    (0xb895603f6a2fe417, 0x3c29878ebe836d9d, 0x3f8921d1fcdec784),
    (0x3899e58994be786b, 0xbbfb1d63091a0130, 0x3f992155f7a3667e),
    (0xb8cae1fe49361008, 0x3c2686f65ba93ac0, 0x3fa2d865759455cd),
    (0xb8cd7476f4c4b019, 0xbc2912bd0d569a90, 0x3fa91f65f10dd814),
    (0xb8cc658264b712ae, 0xbc22e1ebe392bffe, 0x3faf656e79f820e0),
    (0xb8de51df6b678492, 0xbc49a088a8bf6b2c, 0x3fb2d52092ce19f6),
    (0xb8eacf4b93e82b92, 0xbc4f4022d03f6c9a, 0x3fb5f6d00a9aa419),
    (0xb8b18edefcf7ef57, 0xbc3e2718d26ed688, 0x3fb917a6bc29b42c),
    (0x38ab9872ee78a996, 0xbc24f39df133fb21, 0x3fbc3785c79ec2d5),
    (0x38ee28dc484e8ef5, 0x3c4a2704729ae56d, 0x3fbf564e56a9730e),
    (0x38ea72209cc19599, 0xbc6523434d1b3cfa, 0x3fc139f0cedaf577),
    (0x38ff07f9fe14048c, 0x3c513000a89a11e0, 0x3fc2c8106e8e613a),
    (0xb8deda00cb1a2ee7, 0xbc5285a24119f7b1, 0x3fc45576b1293e5a),
    (0xb90c1de6e152ea39, 0x3c6531ff779ddac6, 0x3fc5e214448b3fc6),
    (0xb9029c5aa19f745e, 0x3c61d5eeec501b2f, 0x3fc76dd9de50bf31),
    (0x3909b09f9ca72c69, 0xbc626d19b9ff8d82, 0x3fc8f8b83c69a60b),
    (0x38f2a808c47e96b3, 0xbc687905ffd084ad, 0x3fca82a025b00451),
    (0xb8bf0cd3647fe397, 0xbc1af1439e521935, 0x3fcc0b826a7e4f63),
    (0xb90ccf89f63a97ef, 0x3c675b92277107ad, 0x3fcd934fe5454311),
    (0xb90b4ce553ffbd03, 0xbc642deef11da2c4, 0x3fcf19f97b215f1b),
    (0xb89ff0d3f8fd5fe5, 0xbc0412cdb72583cc, 0x3fd04fb80e37fdae),
    (0xb91779f4232b3b53, 0x3c7824c20ab7aa9a, 0x3fd111d262b1f677),
    (0x390e275158880b2e, 0xbc6720d41c13519e, 0x3fd1d3443f4cdb3e),
    (0x3917eea71c14d05c, 0xbc75d28da2c4612d, 0x3fd294062ed59f06),
    (0x38f3630e9b81d82d, 0xbc73cb002f96e062, 0x3fd35410c2e18152),
    (0x38fe6057b0a0a42f, 0x3c70c97c4afa2518, 0x3fd4135c94176601),
    (0xb8d674c881879fe5, 0x3c62417218792858, 0x3fd4d1e24278e76a),
    (0xb88f072f54189325, 0xbc1efdc0d58cf620, 0x3fd58f9a75ab1fdd),
    (0x38fd84da162f122c, 0x3c510d2b4a664121, 0x3fd64c7ddd3f27c6),
    (0x391bc76fbdd51dfd, 0xbc744b19e0864c5d, 0x3fd7088530fa459f),
    (0xb86ff7399b4c9d2d, 0x3c19a3f21ef3e8d9, 0x3fd7c3a9311dcce7),
    (0xb8f11e4420e0a4b5, 0xbc672cedd3d5a610, 0x3fd87de2a6aea963),
    (0xb8f1a3e31dbe0a42, 0x3c6684319e5ad5b1, 0x3fd9372a63bc93d7),
    (0xb8f4e8de9013a792, 0x3c66da81290bdbab, 0x3fd9ef7943a8ed8a),
    (0xb8fca5a797f46d64, 0xbc7d5f106ee5ccf7, 0x3fdaa6c82b6d3fca),
    (0xb8ecfcff7c31af0c, 0x3c65b362cb974183, 0x3fdb5d1009e15cc0),
    (0xb8e7b15b25fa6dd7, 0xbc7813aabb515206, 0x3fdc1249d8011ee7),
    (0x38f68e65a5c94540, 0x3c56850e59c37f8f, 0x3fdcc66e9931c45e),
    (0xb915dd80a573c37b, 0x3c7550ec87bc0575, 0x3fdd79775b86e389),
    (0x38f878ed68aad82a, 0x3c5e0d891d3c6841, 0x3fde2b5d3806f63b),
    (0xb8a0b9a67de3b47b, 0xbc7dd0f7c33edee6, 0x3fdedc1952ef78d6),
    (0x38d71a2d56b84136, 0xbc32ec1fc1b776b8, 0x3fdf8ba4dbf89aba),
    (0xb9150f79150c0823, 0xbc734a35e7c2368c, 0x3fe01cfc874c3eb7),
    (0x3920157dad78ffcb, 0xbc8a5a014347406c, 0x3fe073879922ffee),
    (0xb901739adfbc224f, 0xbc88d3d7de6ee9b2, 0x3fe0c9704d5d898f),
    (0xb91cdecf888dbf4f, 0xbc8ef23b69abe4f1, 0x3fe11eb3541b4b23),
    (0xb91fd0f0bbc6a380, 0xbc87eef2ccc50575, 0x3fe1734d63dedb49),
    (0xb9256f3106b0516d, 0x3c8b25dd267f6600, 0x3fe1c73b39ae68c8),
    (0xb921badbe399ae0d, 0xbc83a7b177c68fb2, 0x3fe21a799933eb59),
    (0xb92c7d2376953a04, 0xbc85da743ef3770c, 0x3fe26d054cdd12df),
    (0x38f73b9567fb901c, 0xbc514981c796ee46, 0x3fe2bedb25faf3ea),
    (0xb8d68e6523ac8297, 0xbc6efcc626f74a6f, 0x3fe30ff7fce17035),
    (0x391a810db3b41a05, 0xbc81fcb3a35857e7, 0x3fe36058b10659f3),
    (0xb91d4661e2f6dea9, 0x3c7e3e25e3954964, 0x3fe3affa292050b9),
    (0xb92ceac031038730, 0x3c836916608c5061, 0x3fe3fed9534556d4),
    (0x39011a6e1c0b805f, 0x3c68076a2cfdc6b3, 0x3fe44cf325091dd6),
    (0xb91a28d104e615f9, 0xbc827ee16d719b94, 0x3fe49a449b9b0939),
    (0xb90cbaeb2aa7f85c, 0x3c63c293edceb327, 0x3fe4e6cabbe3e5e9),
    (0x3904d7bd3c5cabf9, 0xbc7a12eb89da0257, 0x3fe5328292a35596),
    (0x38fa94c2fd0f385a, 0xbc875720992bfbb2, 0x3fe57d69348ceca0),
    (0x39012b26c80789b2, 0x3c8069ea9c0bc32a, 0x3fe5c77bbe65018c),
    (0x3912f34699090e37, 0xbc7251b352ff2a37, 0x3fe610b7551d2cdf),
    (0x3923deb1453a5b9f, 0x3c8c3d64fbf5de23, 0x3fe6591925f0783d),
    (0x39257d3e3adec175, 0xbc8bdd3413b26456, 0x3fe6a09e667f3bcd),
];

/// `cos(jπ/256)` for `j` in `0..=64`, triple-double.
pub(crate) static COS_TABLE: [(u64, u64, u64); 65] = [
    (0x0000000000000000, 0x0000000000000000, 0x3ff0000000000000),
    (0xb8dc47801c9daa65, 0x3c85dda3c81fbd0d, 0x3fefff62169b92db),
    (0xb923d19b52e092db, 0xbc81354d4556e4cb, 0x3feffd886084cd0d),
    (0x38fb9c530bd6fbe4, 0xbc88b4cdcdb25956, 0x3feffa72effef75d),
    (0x38f453dcf53e4baa, 0xbc6c57bc2e24aa15, 0x3feff621e3796d7e),
    (0x39295cd679609b50, 0x3c801a8ce18a4b9e, 0x3feff095658e71ad),
    (0x390c2c4c8e7c3174, 0x3c6521ecd0c67e35, 0x3fefe9cdad01883a),
    (0x38fc3f85f0637818, 0x3c6a23e3202a884e, 0x3fefe1cafcbd5b09),
    (0x391ba7bd68b25db4, 0xbc887df6378811c7, 0x3fefd88da3d12526),
    (0xb8b53e00b42821c5, 0xbc75dd6f830d4c09, 0x3fefce15fd6da67b),
    (0xb923162266c5450f, 0x3c81ec8668ecacee, 0x3fefc26470e19fd3),
    (0xb9166e41aa58edd7, 0x3c71bfac7397cc08, 0x3fefb5797195d741),
    (0xb902a212f347e949, 0xbc87a0a8ca13571f, 0x3fefa7557f08a517),
    (0xb92d03198c482948, 0xbc8e2ae0eea5963b, 0x3fef97f924c9099b),
    (0xb90f44b6dc911d8d, 0x3c7ab256778ffcb6, 0x3fef8764fa714ba9),
    (0x39111cefda2496d1, 0x3c884f31d743195c, 0x3fef7599a3a12077),
    (0xb9163744e82fc701, 0x3c7562172a361fd3, 0x3fef6297cff75cb0),
    (0x3916c8dde196926f, 0xbc78ee01e695ac05, 0x3fef4e603b0b2f2d),
    (0xb91359fe192a6166, 0xbc7d7bafb51f72e6, 0x3fef38f3ac64e589),
    (0xb92be85ba3ed1d24, 0xbc820cb81c8d94ab, 0x3fef2252f7763ada),
    (0xb91db915a9794d33, 0x3c752c7adc6b4989, 0x3fef0a7efb9230d7),
    (0xb90661ad8779453f, 0x3c86310a67fe774f, 0x3feef178a3e473c2),
    (0xb88eea7cbd5ac167, 0x3c7e82c791f59cc2, 0x3feed740e7684963),
    (0xb91ca52cd223093a, 0x3c7c6c8c615e7277, 0x3feebbd8c8df0b74),
    (0xb921ce7542369ecd, 0x3c8760b1e2e3f81e, 0x3fee9f4156c62dda),
    (0xb91da46c9e796043, 0xbc7d0afe686b5e0a, 0x3fee817bab4cd10d),
    (0xb9054aec99b7a418, 0xbc616b56f2847754, 0x3fee6288ec48e112),
    (0xb909f9cbe0873be5, 0x3c8a873889744882, 0x3fee426a4b2bc17e),
    (0x3920e62b13b565c2, 0xbc8014c76c126527, 0x3fee212104f686e5),
    (0xb918b8b03f91234a, 0xbc8514ea88425567, 0x3fedfeae622dbe2b),
    (0x3912c06bf13eb37f, 0x3c883c37c6107db3, 0x3feddb13b6ccc23c),
    (0xb9102882432fc151, 0xbc7adee7eae69460, 0x3fedb6526238a09b),
    (0xb904f3f87abe1619, 0x3c7457e610231ac2, 0x3fed906bcf328d46),
    (0x390b2ae77987a123, 0xbc7e8c61c6393d55, 0x3fed696173c9e68b),
    (0xb9242fb98551f41e, 0xbc84ef5295d25af2, 0x3fed4134d14dc93a),
    (0x38f8e1f18801dd8f, 0xbc5101da3540130a, 0x3fed17e7743e35dc),
    (0x38e525e5e3766505, 0xbc5e7b6bb5ab58ae, 0x3feced7af43cc773),
    (0x38c897c1ed6cb370, 0x3c7e57613b68f6ab, 0x3fecc1f0f3fcfc5c),
    (0x38f515c8743f3fe2, 0xbc52fb761e946603, 0x3fec954b213411f5),
    (0x38ca8ced1ed6184d, 0x3c6d86cac7c5ff5b, 0x3fec678b3488739b),
    (0xb90d3f8010ae0079, 0xbc76e0b1757c8d07, 0x3fec38b2f180bdb1),
    (0x38f7366c9985ae95, 0x3c5b157fd80e2946, 0x3fec08c426725549),
    (0x390d7366a512bcb3, 0xbc8825a732ac700a, 0x3febd7c0ac6f952a),
    (0x39279558f0cdf224, 0x3c87ea4e370753b6, 0x3feba5aa673590d2),
    (0xb916f0112635b4d1, 0xbc8bc69f324e6d61, 0x3feb728345196e3e),
    (0x39272358ed1be6ee, 0xbc8eb6b8bf11a493, 0x3feb3e4d3ef55712),
    (0xb92516b845a7a95b, 0xbc8926da300ffcce, 0x3feb090a58150200),
    (0x3918475bfa893e9c, 0xbc847fbe07bea548, 0x3fead2bc9e21d511),
    (0x38cf345a348e97cd, 0x3c39f630e8b6dac8, 0x3fea9b66290ea1a3),
    (0x38ec1bae4b67285d, 0xbc7e911152248d10, 0x3fea63091b02fae2),
    (0xb91041b871e4d097, 0xbc7128bb015df175, 0x3fea29a7a0462782),
    (0xb9101a34a432eb6d, 0x3c7b1dfcb60445c2, 0x3fe9ef43ef29af94),
    (0xb9196d598bf43c65, 0xbc830ee286712474, 0x3fe9b3e047f38741),
    (0xb9275c84c6138f48, 0xbc815479a240665e, 0x3fe9777ef4c7d742),
    (0x3922644a97f89b35, 0x3c83d419a920df0b, 0x3fe93a22499263fb),
    (0xb8869d198af7be04, 0xbc66dfa99c86f2f1, 0x3fe8fbcca3ef940d),
    (0x391cc9ab51d0df4e, 0xbc82c5e12ed1336d, 0x3fe8bc806b151741),
    (0x391736c66ed4a359, 0xbc82dabc0c3f64cd, 0x3fe87c400fba2ebf),
    (0x39005eb6bc2e067e, 0xbc76f420f8ea3475, 0x3fe83b0e0bff976e),
    (0xb9292310b691d13b, 0xbc89c8d8ce93c917, 0x3fe7f8ece3571771),
    (0xb904951b1cc475b3, 0xbc70f537acdf0ad7, 0x3fe7b5df226aafaf),
    (0xb91f69260882fb6c, 0x3c75cfce8d84068f, 0x3fe771e75f037261),
    (0x3927e9b6876252fe, 0x3c80d4ef0f1d915c, 0x3fe72d0837efff96),
    (0xb8e6d2c37f2c5be1, 0xbc8dbc03c84e226e, 0x3fe6e74454eaa8af),
    (0x39257d3e3adec175, 0xbc8bdd3413b26456, 0x3fe6a09e667f3bcd),
];
