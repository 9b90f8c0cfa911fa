use super::{Block, DescriptiveContent, Span};

pub(super) fn vibrio_cholerae() -> DescriptiveContent {
    DescriptiveContent {
        title: "Vibrio cholerae".to_string(),
        blocks: vec![
            Block::Paragraph(vec![
                Span::plain("cgMLST@Taiwan provides a "),
                Span::italic("Vibrio cholerae"),
                Span::plain(" allele database, "),
                Span::italic("V. cholerae"),
                Span::plain(
                    " cgMLST profile database, and tools for cgMLST profiling, strain tracking, \
                     and clustering of cgMLST profiles via the internet. cgMLST profiling is \
                     based on 2,951 ",
                ),
                Span::italic("V. cholerae"),
                Span::plain(" core genes, which are identified from 1,647 "),
                Span::italic("V. cholerae"),
                Span::plain(
                    " genomes from the NCBI database. Core genes are designated for those \
                     existing in more than 95% of the 1,647 genomes.",
                ),
            ]),
            Block::Figure {
                asset: "figures.vc_loci_feq_distribution".to_string(),
                caption: vec![
                    Span::plain("Frequency of loci (genes) over 1,647 "),
                    Span::italic("V. cholerae"),
                    Span::plain(" genomes."),
                ],
            },
            Block::Paragraph(vec![
                Span::plain("The cgMLST profile database contains cgMLST profiles for the "),
                Span::italic("V. cholerae"),
                Span::plain(
                    " strains with genomic sequences deposited in the NCBI database. Nowadays, \
                     the database contains 5,048 cgMLST profiles and will be updated by time.",
                ),
            ]),
            Block::Paragraph(vec![Span::plain(
                "cgMLST@Taiwan was developed in the laboratories of Centers for Disease Control, \
                 Ministry of Health and Welfare, Taiwan by Yueh-Hua Tu, Yi-Syong Chen, Bo-Han Chen, \
                 Yen-Yi Liu, Yu-Ping Hong, Ru-Hsiou Teng, You-Wun Wang, and Chien-Shun Chiou.",
            )]),
            Block::Heading("Citations".to_string()),
            Block::Paragraph(vec![Span::plain("For publication of results, please cite:")]),
            Block::Paragraph(vec![
                Span::plain(
                    "Yueh-Hua Tu, Yi-Syong Chen, Bo-Han Chen, Yen-Yi Liu, Yu-Ping Hong, \
                     Ru-Hsiou Teng, You-Wun Wang, and Chien-Shun Chiou. cgMLST@Taiwan: \
                     A web service for ",
                ),
                Span::italic("Vibrio cholerae"),
                Span::plain(
                    " cgMLST profiling and global strain tracking. J Clin Microbiol. 2019.",
                ),
            ]),
            Block::Heading("Contact".to_string()),
            Block::Contacts {
                intro: "For any question please contact Chien-Shun Chiou by email:".to_string(),
                emails: vec![
                    "nipmcsc@cdc.gov.tw".to_string(),
                    "nipmcsc@gmail.com".to_string(),
                ],
            },
        ],
    }
}
