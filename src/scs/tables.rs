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
use crate::double::Double;
use crate::scs::Scs;

/// `2/π` as base 2^30 digits, digit `k` has weight `2^(-30k)`.
pub(crate) static TWO_OVER_PI_DIGITS: [u32; 48] = [
    0x00000000, 0x28be60db, 0x24e44152, 0x27f09d5f,
    0x11f534dd, 0x3036d8a5, 0x1993c439, 0x0107f945,
    0x23abdebb, 0x31586dc9, 0x06e3a424, 0x374b8019,
    0x092eea09, 0x3464873f, 0x21deb1cb, 0x04a69cfb,
    0x288235f5, 0x0baed121, 0x0e99c702, 0x1ad17df9,
    0x013991d6, 0x0e60d4ce, 0x1f49c845, 0x3e2ef7e4,
    0x283b1ff8, 0x25fff781, 0x1980fef2, 0x3c462d68,
    0x0a6d1f6d, 0x0d9fb3c9, 0x3cb09b74, 0x3d18fd9a,
    0x1e5fea2d, 0x1d49eeb1, 0x3ebe5f17, 0x2cf41ce7,
    0x378a5292, 0x3a9afed7, 0x3b11f8d5, 0x3421580c,
    0x3046fc7b, 0x1aeafc33, 0x3bc209af, 0x10d876a7,
    0x2391615e, 0x3986c219, 0x199855f1, 0x1281a102,
];

/// `256/π` as base 2^30 digits, digit `k` has weight `2^(-30k)`.
pub(crate) static D256_OVER_PI_DIGITS: [u32; 48] = [
    0x00000051, 0x1f306dc9, 0x3220a94f, 0x384eafa3,
    0x3a9a6ee0, 0x1b6c52b3, 0x09e21c82, 0x03fca2c7,
    0x15ef5de2, 0x2c36e48d, 0x31d2126e, 0x25c00c92,
    0x177504e8, 0x32439fc3, 0x2f58e589, 0x134e7dd1,
    0x011afa97, 0x1768909d, 0x0ce38135, 0x28befc82,
    0x1cc8eb1c, 0x306a673e, 0x24e422fc, 0x177bf250,
    0x1d8ffc4b, 0x3ffbc0b3, 0x007f7978, 0x2316b414,
    0x368fb69b, 0x0fd9e4f9, 0x184dba7a, 0x0c7ecd3c,
    0x2ff516ba, 0x24f758fd, 0x1f2f8bd9, 0x3a0e73ef,
    0x05294975, 0x0d7f6bf6, 0x08fc6ae8, 0x10ac0660,
    0x237e3db5, 0x357e19f7, 0x2104d7a1, 0x2c3b53c7,
    0x08b0af73, 0x03610cb3, 0x0c2af8a5, 0x00d0811b,
];

/// π/2
pub(crate) const PIO2_SCS: Scs = Scs {
    h_word: [
        0x00000001, 0x2487ed51, 0x042d1846, 0x26263314,
        0x1701b839, 0x28948127, 0x01114cf9, 0x23a0105d,
    ],
    exception: Double::ONE,
    index: 0,
    sign: 1,
};

/// π/256
pub(crate) const PIO256_SCS: Scs = Scs {
    h_word: [
        0x00c90fda, 0x28885a30, 0x234c4c66, 0x0a2e0370,
        0x1cd12902, 0x13822299, 0x3cc74020, 0x2efa98ec,
    ],
    exception: Double::ONE,
    index: -1,
    sign: 1,
};
