//! Test fixtures and helpers for MRT parser testing
//!
//! Sample content follows the published ApJ machine-readable table layout
//! (ACT galaxy-cluster member catalog).

mod scanner_tests;
mod splitter_tests;

/// Complete sample table: preamble, descriptor block, notes and data rows
pub fn act_cluster_table() -> &'static str {
    "\
Title: The Atacama Cosmology Telescope: Dynamical Masses and Scaling
       Relations for a Sample of Massive Sunyaev-Zel'dovich Effect
       Selected Galaxy Clusters
Authors: Sifon C., Menanteau F., Hasselfield M., Marriage T.A., Hughes J.P.
Table: Spectroscopic members of the 16 ACT clusters
================================================================================
Byte-by-byte Description of file: apj475645t8_mrt.txt
--------------------------------------------------------------------------------
   Bytes Format Units    Label  Explanations
--------------------------------------------------------------------------------
   1- 22 A22    ---      ID     Galaxy identifier (1)
  24- 25 I2     h        RAh    Hour of Right Ascension (J2000)
  27- 28 I2     min      RAm    Minute of Right Ascension (J2000)
  30- 33 F4.1   s        RAs    Second of Right Ascension (J2000)
      35 A1     ---      DE-    Sign of the Declination (J2000)
  36- 37 I2     deg      DEd    Degree of Declination (J2000)
  39- 40 I2     arcmin   DEm    Arcminute of Declination (J2000)
  42- 45 F4.1   arcsec   DEs    Arcsecond of Declination (J2000)
  47- 52 F6.3   mag      imag   The i band magnitude
  54- 60 F7.5   ---      z      Cross-correlation redshift (2)
  62- 68 F7.5   ---    e_z      Error in z (2)
  70- 74 F5.2   ---      rcc    Cross-correlation S/N; Tonry & Davis 1979 (2)
  76-114 A39    ---      MSF    Main Spectral Features
--------------------------------------------------------------------------------
Note (1): Based on the J2000.0 position of each galaxy and using the initials
          of the first three authors of this paper to identify the catalog.
Note (2): From the RVSAO package in IRAF.
--------------------------------------------------------------------------------
SMH J010257.7-491619.2 01 02 57.7 -49 16 19.2 19.135 0.87014 0.00030  3.39 Ca-II(K,H)
SMH J010301.9-491618.8 01 03 01.9 -49 16 18.8 22.722 0.86890 0.00022  3.59 Ca-II(K,H);[OII]
"
}

/// Header-only variant: marker, separators and descriptor lines, no data
pub fn header_lines() -> Vec<&'static str> {
    vec![
        "   Bytes Format Units    Label  Explanations",
        "--------------------------------------------------------------------------------",
        "   1- 22 A22    ---      ID     Galaxy identifier",
        "      35 A1     ---      DE-    Sign of the Declination",
        "--------------------------------------------------------------------------------",
    ]
}
